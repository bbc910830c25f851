//! Test doubles for the bridge collaborators

use crate::ui::backend::{HostCallbacks, TextureHandle};
use crate::ui::context::{FileChooser, FontAtlasData, ImmediateUi};
use crate::ui::dialog::{DialogMode, DialogOutcome};
use crate::ui::input::{InputBackend, InputEvent, InputState, PointerState, UiKey};
use crate::ui::rendering::{BufferUpload, DrawData, DrawIdx, DrawPrimitives, DrawVert};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Owned copy of one `upload_buffers` call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUpload {
    pub vertices: Vec<DrawVert>,
    pub indices: Vec<DrawIdx>,
    pub vertex_bytes: Vec<u8>,
    pub index_bytes: Vec<u8>,
    pub vertex_byte_len: usize,
    pub index_byte_len: usize,
}

/// Host call in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreateTexture { width: u32, height: u32, bytes: usize },
    Upload,
    Draw(DrawPrimitives),
    ReceivePath(PathBuf),
}

/// Host that records every callback
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub uploads: Vec<RecordedUpload>,
    pub draws: Vec<DrawPrimitives>,
    pub paths: Vec<PathBuf>,
    next_texture: u64,
}

impl HostCallbacks for RecordingHost {
    fn create_texture(&mut self, pixels: &[u8], width: u32, height: u32) -> TextureHandle {
        self.calls.push(HostCall::CreateTexture { width, height, bytes: pixels.len() });
        self.next_texture += 1;
        TextureHandle(self.next_texture)
    }

    fn upload_buffers(&mut self, upload: &BufferUpload<'_>) {
        self.calls.push(HostCall::Upload);
        self.uploads.push(RecordedUpload {
            vertices: upload.vertices.to_vec(),
            indices: upload.indices.to_vec(),
            vertex_bytes: upload.vertex_bytes().to_vec(),
            index_bytes: upload.index_bytes().to_vec(),
            vertex_byte_len: upload.vertex_byte_len(),
            index_byte_len: upload.index_byte_len(),
        });
    }

    fn draw_primitives(&mut self, draw: &DrawPrimitives) {
        self.calls.push(HostCall::Draw(*draw));
        self.draws.push(*draw);
    }

    fn receive_path(&mut self, path: &Path) {
        self.calls.push(HostCall::ReceivePath(path.to_path_buf()));
        self.paths.push(path.to_path_buf());
    }
}

/// UI library that replays queued frames
#[derive(Debug, Default)]
pub struct ScriptedUi {
    pub atlas: FontAtlasData,
    pub frames: VecDeque<DrawData>,
    pub current: DrawData,
    pub io: InputState,
    pub font_texture: Option<TextureHandle>,
    pub font_cleared: bool,
    /// Input model as seen at each `new_frame`
    pub frame_inputs: Vec<InputState>,
    pub renders: usize,
    pub shut_down: bool,
}

impl ScriptedUi {
    pub fn with_atlas(width: u32, height: u32) -> Self {
        Self {
            atlas: FontAtlasData {
                pixels: vec![0xff; (width * height) as usize],
                width,
                height,
            },
            ..Self::default()
        }
    }

    pub fn push_frame(&mut self, frame: DrawData) {
        self.frames.push_back(frame);
    }
}

impl ImmediateUi for ScriptedUi {
    fn font_atlas_alpha8(&mut self) -> FontAtlasData {
        self.atlas.clone()
    }

    fn set_font_texture(&mut self, texture: TextureHandle) {
        self.font_texture = Some(texture);
    }

    fn clear_font_data(&mut self) {
        self.atlas.pixels.clear();
        self.font_cleared = true;
    }

    fn io_mut(&mut self) -> &mut InputState {
        &mut self.io
    }

    fn new_frame(&mut self) {
        self.frame_inputs.push(self.io.clone());
        self.io.take_input_characters();
    }

    fn render(&mut self) -> &DrawData {
        self.renders += 1;
        self.current = self.frames.pop_front().unwrap_or_default();
        &self.current
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }
}

/// Input backend driven directly by the test
#[derive(Debug, Default)]
pub struct FakeInput {
    pub subscribed: bool,
    pub events: Vec<InputEvent>,
    pub pointer: PointerState,
    pub time: f64,
    /// Host clipboard content
    pub clipboard: Option<String>,
    /// Every `set_clipboard_text` call, in order
    pub clipboard_writes: Vec<String>,
}

impl FakeInput {
    pub const KEY_BASE: usize = 400;
}

impl InputBackend for FakeInput {
    fn subscribe(&mut self) {
        self.subscribed = true;
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.events.clear();
    }

    fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    fn key_code(&self, key: UiKey) -> usize {
        Self::KEY_BASE + key.index()
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    fn now_seconds(&self) -> f64 {
        self.time
    }

    fn clipboard_text(&self) -> Option<String> {
        self.clipboard.clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
        self.clipboard_writes.push(text.to_string());
    }
}

/// Chooser answering from a script, one entry per poll
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    pub script: VecDeque<Option<DialogOutcome>>,
    pub polls: Vec<(DialogMode, PathBuf)>,
}

impl ScriptedChooser {
    pub fn new(script: Vec<Option<DialogOutcome>>) -> Self {
        Self {
            script: script.into(),
            polls: Vec::new(),
        }
    }
}

impl FileChooser for ScriptedChooser {
    fn poll(&mut self, mode: DialogMode, current_dir: &Path) -> Option<DialogOutcome> {
        self.polls.push((mode, current_dir.to_path_buf()));
        self.script.pop_front().flatten()
    }
}
