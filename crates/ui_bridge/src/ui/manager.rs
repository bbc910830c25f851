//! UI Bridge
//!
//! Lifecycle controller tying the UI library, the host callbacks, the input backend
//! and the file chooser together.
//!
//! Initialization happens in [`UiBridge::init`] and teardown in
//! [`UiBridge::shutdown`], which consumes the bridge. Host callbacks therefore only
//! ever run between the two.

use crate::core::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::foundation::time::FrameClock;
use crate::ui::backend::{HostCallbacks, TextureHandle};
use crate::ui::context::{FileChooser, ImmediateUi};
use crate::ui::dialog::{DialogMode, FileDialog};
use crate::ui::input::{InputBackend, InputSampler, InputState};
use crate::ui::rendering::{DrawCommandReplayer, DrawListBatcher};

/// What one `render` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Whether the combined buffers were uploaded
    pub uploaded: bool,
    /// Vertices uploaded
    pub vertices: usize,
    /// Indices uploaded
    pub indices: usize,
    /// Draw calls issued
    pub draw_calls: usize,
}

/// Collaborators handed back by [`UiBridge::shutdown`]
#[derive(Debug)]
pub struct BridgeParts<U, H, B, F> {
    /// UI library, already shut down
    pub ui: U,
    /// Host callbacks; no longer called by the bridge
    pub host: H,
    /// Input backend, unsubscribed
    pub input: B,
    /// File chooser
    pub chooser: F,
}

/// Bridge between an immediate-mode UI library and a host renderer
pub struct UiBridge<U, H, B, F>
where
    U: ImmediateUi,
    H: HostCallbacks,
    B: InputBackend,
    F: FileChooser,
{
    ui: U,
    host: H,
    input: B,
    chooser: F,

    clock: FrameClock,
    sampler: InputSampler,
    batcher: DrawListBatcher,
    replayer: DrawCommandReplayer,
    dialog: FileDialog,

    font_texture: TextureHandle,
}

impl<U, H, B, F> UiBridge<U, H, B, F>
where
    U: ImmediateUi,
    H: HostCallbacks,
    B: InputBackend,
    F: FileChooser,
{
    /// Initialize the UI library against the host
    ///
    /// Uploads the font atlas through `create_texture`, installs the key map,
    /// connects the clipboard and subscribes the input backend. The configuration and font atlas are
    /// checked before the host sees any call.
    pub fn init(mut ui: U, mut host: H, mut input: B, chooser: F, config: BridgeConfig) -> BridgeResult<Self> {
        log::info!("Initializing UI bridge...");

        config.validate().map_err(BridgeError::InvalidConfig)?;

        let batcher = DrawListBatcher::with_capacity(
            config.growth,
            config.initial_vertex_capacity,
            config.initial_index_capacity,
        )?;

        // Font texture
        let atlas = ui.font_atlas_alpha8();
        if !atlas.is_consistent() {
            return Err(BridgeError::MalformedFontAtlas {
                width: atlas.width,
                height: atlas.height,
                expected: atlas.width as usize * atlas.height as usize,
                actual: atlas.pixels.len(),
            });
        }
        let font_texture = host.create_texture(&atlas.pixels, atlas.width, atlas.height);
        ui.set_font_texture(font_texture);
        ui.clear_font_data();
        log::debug!(
            "Font atlas {}x{} uploaded as texture {:?}",
            atlas.width, atlas.height, font_texture
        );

        // Key symbol mappings and clipboard
        let io = ui.io_mut();
        io.key_map = input.key_map();
        io.clipboard.connect(input.clipboard_text());

        // Host input events
        input.subscribe();

        log::info!("UI bridge initialized");

        Ok(Self {
            ui,
            host,
            input,
            chooser,
            clock: FrameClock::new(config.default_delta_time),
            sampler: InputSampler::new(),
            batcher,
            replayer: DrawCommandReplayer::new(),
            dialog: FileDialog::new(config.start_directory),
            font_texture,
        })
    }

    /// Prepare the next frame
    ///
    /// Applies pending input events, samples time and pointer state, syncs the
    /// clipboard with the host, starts the UI library's frame, then lets an open file dialog run. A path chosen this frame
    /// goes straight to `receive_path`.
    pub fn update(&mut self) {
        let io = self.ui.io_mut();

        for event in self.input.drain_events() {
            self.sampler.handle_event(event, io);
        }
        io.delta_time = self.clock.tick(self.input.now_seconds());
        self.sampler.sample(self.input.pointer_state(), io);

        forward_clipboard(io, &mut self.input);
        io.clipboard.refresh(self.input.clipboard_text());

        self.ui.new_frame();

        if let Some(path) = self.dialog.poll(&mut self.chooser) {
            self.host.receive_path(&path);
        }
    }

    /// Finish the frame and hand it to the host
    ///
    /// Uploads the combined buffers once, then issues one draw call per draw
    /// command. A frame without geometry produces neither.
    pub fn render(&mut self) -> BridgeResult<FrameStats> {
        forward_clipboard(self.ui.io_mut(), &mut self.input);

        let draw_data = self.ui.render();

        if !self.batcher.upload(draw_data, &mut self.host)? {
            return Ok(FrameStats::default());
        }
        let upload = self.batcher.current_upload();
        let (vertices, indices) = (upload.vertices.len(), upload.indices.len());

        let draw_calls = self.replayer.replay(draw_data, &mut self.host)?;

        Ok(FrameStats {
            uploaded: true,
            vertices,
            indices,
            draw_calls,
        })
    }

    /// Open a file dialog; its result arrives through `receive_path`
    pub fn open_dialog(&mut self, mode: DialogMode) -> BridgeResult<()> {
        self.dialog.open(mode)
    }

    /// Tear down the bridge
    ///
    /// Hands any pending clipboard text to the host, disconnects the clipboard,
    /// unsubscribes from host input and shuts the UI library down, then returns the
    /// collaborators to the caller.
    pub fn shutdown(mut self) -> BridgeParts<U, H, B, F> {
        log::info!("Shutting down UI bridge...");
        let io = self.ui.io_mut();
        forward_clipboard(io, &mut self.input);
        io.clipboard.disconnect();

        self.input.unsubscribe();
        self.ui.shutdown();
        log::info!(
            "UI bridge shut down after {} frames ({:.1}s), {} uploads, {} draw calls",
            self.clock.frame_count(),
            self.clock.total_time(),
            self.batcher.uploads(),
            self.replayer.draw_calls()
        );

        BridgeParts {
            ui: self.ui,
            host: self.host,
            input: self.input,
            chooser: self.chooser,
        }
    }

    /// Texture the font atlas was uploaded as
    pub fn font_texture(&self) -> TextureHandle {
        self.font_texture
    }

    /// File dialog session
    pub fn dialog(&self) -> &FileDialog {
        &self.dialog
    }

    /// File dialog session, e.g. to move the start directory
    pub fn dialog_mut(&mut self) -> &mut FileDialog {
        &mut self.dialog
    }

    /// Frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Batcher, for buffer statistics
    pub fn batcher(&self) -> &DrawListBatcher {
        &self.batcher
    }

    /// UI library
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// UI library, for building widgets between `update` and `render`
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Host callbacks
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Input backend
    pub fn input(&self) -> &B {
        &self.input
    }

    /// Input backend, for forwarding host events
    pub fn input_mut(&mut self) -> &mut B {
        &mut self.input
    }
}

/// Hand text the UI library copied to the host clipboard
fn forward_clipboard<B: InputBackend>(io: &mut InputState, input: &mut B) {
    if let Some(text) = io.clipboard.take_outgoing() {
        log::trace!("Forwarding {} bytes to the host clipboard", text.len());
        input.set_clipboard_text(&text);
    }
}
