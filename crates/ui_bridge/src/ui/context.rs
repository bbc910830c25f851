//! Seams to the immediate-mode UI library and the file chooser widget
//!
//! Both are external collaborators: the bridge only drives them. Layout, font
//! rasterization and widget behavior live on the other side of these traits.

use crate::ui::backend::TextureHandle;
use crate::ui::dialog::{DialogMode, DialogOutcome};
use crate::ui::input::InputState;
use crate::ui::rendering::DrawData;
use std::path::Path;

/// Alpha-only font atlas bitmap, one byte per pixel, row-major
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontAtlasData {
    /// Pixel coverage values
    pub pixels: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl FontAtlasData {
    /// Whether `pixels` holds exactly `width * height` bytes
    pub fn is_consistent(&self) -> bool {
        self.pixels.len() == self.width as usize * self.height as usize
    }
}

/// The immediate-mode UI library as seen by the bridge
pub trait ImmediateUi {
    /// Rasterized font atlas as an alpha-only bitmap
    fn font_atlas_alpha8(&mut self) -> FontAtlasData;

    /// Store the host texture created from the font atlas
    fn set_font_texture(&mut self, texture: TextureHandle);

    /// Release CPU-side font data once the texture exists
    fn clear_font_data(&mut self);

    /// Input model read by the library's next layout pass
    fn io_mut(&mut self) -> &mut InputState;

    /// Start a frame
    fn new_frame(&mut self);

    /// Finish the frame's layout and return its draw output
    fn render(&mut self) -> &DrawData;

    /// Release all library state
    fn shutdown(&mut self);
}

/// File chooser widget polled once per frame while a dialog is open
pub trait FileChooser {
    /// Draw/advance the chooser; `Some` once the user picked a path or gave up
    fn poll(&mut self, mode: DialogMode, current_dir: &Path) -> Option<DialogOutcome>;
}
