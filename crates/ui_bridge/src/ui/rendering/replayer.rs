//! Draw-command replayer
//!
//! Walks the frame's draw lists a second time and turns every draw command into one
//! host draw call against the buffers the batcher uploaded.

use super::data::{advance_offset, ClipRect, DrawData};
use crate::error::BridgeResult;
use crate::ui::backend::HostCallbacks;

/// One host draw call
///
/// `index_offset` is where the command's indices start in the combined index buffer;
/// `vertex_offset` is the base vertex added to every index, i.e. where the command's
/// draw list starts in the combined vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPrimitives {
    /// Scissor rectangle (x, y, right, bottom)
    pub clip_rect: ClipRect,
    /// Number of indices to draw
    pub elem_count: u32,
    /// First index in the combined index buffer
    pub index_offset: u32,
    /// Base vertex in the combined vertex buffer
    pub vertex_offset: u32,
}

/// Replays draw commands with running offsets
#[derive(Debug, Default)]
pub struct DrawCommandReplayer {
    draw_calls: u64,
}

impl DrawCommandReplayer {
    /// Create a replayer
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue one `draw_primitives` per draw command of the frame
    ///
    /// All commands of a list share the list's base vertex; the index offset moves
    /// after every command. Returns the number of draw calls issued.
    pub fn replay<H: HostCallbacks + ?Sized>(
        &mut self,
        draw_data: &DrawData,
        host: &mut H,
    ) -> BridgeResult<usize> {
        // The whole frame is checked before the first draw call, so a malformed list
        // anywhere leaves the host with no draws at all.
        draw_data.validate()?;

        let mut vertex_offset: u32 = 0;
        let mut index_offset: u32 = 0;
        let mut issued = 0;

        for (position, list) in draw_data.cmd_lists.iter().enumerate() {
            for cmd in &list.cmd_buffer {
                host.draw_primitives(&DrawPrimitives {
                    clip_rect: cmd.clip_rect,
                    elem_count: cmd.elem_count,
                    index_offset,
                    vertex_offset,
                });
                index_offset = advance_offset(index_offset, cmd.elem_count as usize, position, "index")?;
                issued += 1;
            }
            vertex_offset = advance_offset(vertex_offset, list.vtx_buffer.len(), position, "vertex")?;
        }

        self.draw_calls += issued as u64;
        log::trace!("Replayed {} draw commands", issued);
        Ok(issued)
    }

    /// Draw calls issued since creation
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}
