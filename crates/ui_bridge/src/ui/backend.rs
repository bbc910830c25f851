//! Host Callback Contract
//!
//! Defines the interface between the bridge and the host renderer.
//! Keeps the UI library independent of the host's graphics API.

use crate::ui::rendering::{BufferUpload, DrawPrimitives};
use std::fmt;
use std::path::Path;

/// Opaque handle to a texture created by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u64);

/// Resource callbacks the host registers with the bridge
///
/// The bridge owns the implementation from `UiBridge::init` until
/// `UiBridge::shutdown`, so none of these can run outside that window. All calls
/// come from the thread that drives the bridge, one at a time.
pub trait HostCallbacks {
    /// Create a texture from an alpha-only bitmap (one byte per pixel)
    ///
    /// Called once, during init, for the UI library's font atlas.
    fn create_texture(&mut self, pixels: &[u8], width: u32, height: u32) -> TextureHandle;

    /// Upload the frame's combined vertex and index buffers
    ///
    /// Called once per non-empty frame, before any `draw_primitives` of that frame.
    fn upload_buffers(&mut self, upload: &BufferUpload<'_>);

    /// Issue one clipped, indexed draw against the buffers from the last upload
    fn draw_primitives(&mut self, draw: &DrawPrimitives);

    /// Receive the path chosen in a file dialog
    fn receive_path(&mut self, path: &Path);
}

type CreateTextureFn = Box<dyn FnMut(&[u8], u32, u32) -> TextureHandle>;
type BufferDataFn = Box<dyn FnMut(&BufferUpload<'_>)>;
type DrawPrimitivesFn = Box<dyn FnMut(&DrawPrimitives)>;
type ReceivePathFn = Box<dyn FnMut(&Path)>;

/// Callback table built from four closures
///
/// For hosts that register plain functions rather than implementing
/// [`HostCallbacks`] on one of their own types.
pub struct CallbackTable {
    create_texture: CreateTextureFn,
    buffer_data: BufferDataFn,
    draw_primitives: DrawPrimitivesFn,
    receive_path: ReceivePathFn,
}

impl CallbackTable {
    /// Build a table; every slot is mandatory
    pub fn new<C, B, D, R>(create_texture: C, buffer_data: B, draw_primitives: D, receive_path: R) -> Self
    where
        C: FnMut(&[u8], u32, u32) -> TextureHandle + 'static,
        B: FnMut(&BufferUpload<'_>) + 'static,
        D: FnMut(&DrawPrimitives) + 'static,
        R: FnMut(&Path) + 'static,
    {
        Self {
            create_texture: Box::new(create_texture),
            buffer_data: Box::new(buffer_data),
            draw_primitives: Box::new(draw_primitives),
            receive_path: Box::new(receive_path),
        }
    }
}

impl fmt::Debug for CallbackTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackTable").finish_non_exhaustive()
    }
}

impl HostCallbacks for CallbackTable {
    fn create_texture(&mut self, pixels: &[u8], width: u32, height: u32) -> TextureHandle {
        (self.create_texture)(pixels, width, height)
    }

    fn upload_buffers(&mut self, upload: &BufferUpload<'_>) {
        (self.buffer_data)(upload);
    }

    fn draw_primitives(&mut self, draw: &DrawPrimitives) {
        (self.draw_primitives)(draw);
    }

    fn receive_path(&mut self, path: &Path) {
        (self.receive_path)(path);
    }
}
