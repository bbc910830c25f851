//! # UI Bridge
//!
//! Glue between an immediate-mode UI library and a host renderer that owns its own
//! textures, vertex buffers and draw calls.
//!
//! ## Features
//!
//! - **Single upload per frame**: every draw list of a frame is merged into one
//!   combined vertex buffer and one combined index buffer
//! - **Draw-call replay**: draw commands become clipped draw calls carrying base
//!   vertex / base index offsets into the combined buffers
//! - **Input forwarding**: pointer, wheel, text and key events from the glfw backend
//!   feed the UI library's input model
//! - **File dialog sessions**: completed selections are handed back to the host
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ui_bridge::prelude::*;
//!
//! let config = BridgeConfig::load_from_file("ui_bridge.toml")?;
//! ui_bridge::foundation::logging::init_with_filter(&config.log_level);
//!
//! let mut bridge = UiBridge::init(my_ui, my_host, GlfwInputBackend::new(), my_chooser, config)?;
//!
//! while !window.should_close() {
//!     glfw.poll_events();
//!     bridge.input_mut().sync_clipboard(&mut window);
//!     for (_, event) in glfw::flush_messages(&events) {
//!         bridge.input_mut().handle_window_event(&event);
//!     }
//!     bridge.update();
//!     // ... build widgets through the UI library ...
//!     bridge.render()?;
//! }
//!
//! let parts = bridge.shutdown();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

#[cfg(not(feature = "glfw"))]
compile_error!(
    "ui_bridge needs an input backend: enable the `glfw` feature (the only supported backend)"
);

// Core modules
pub mod core;
pub mod config;
pub mod foundation;
pub mod ui;

mod error;

pub use error::{BridgeError, BridgeResult};

/// Common imports for bridge users
pub mod prelude {
    pub use crate::{
        BridgeError, BridgeResult,
        core::config::{BridgeConfig, GrowthPolicy},
        config::Config,
        ui::{
            UiBridge, FrameStats,
            HostCallbacks, CallbackTable, TextureHandle,
            ImmediateUi, FileChooser, FontAtlasData,
            DialogMode, DialogOutcome,
            BufferUpload, DrawPrimitives, DrawData, DrawList, DrawCommand, ClipRect,
            DrawVert, DrawIdx,
            InputBackend, InputEvent, InputState, PointerState, UiKey,
            KeyModifiers, MouseButtons, ClipboardSlot,
            GlfwInputBackend,
        },
    };
}
