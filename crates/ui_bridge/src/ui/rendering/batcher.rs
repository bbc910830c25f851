//! Draw-list batcher
//!
//! Merges every draw list of a frame into one combined vertex buffer and one combined
//! index buffer so the host can upload the whole frame in a single call.

use super::data::DrawData;
use super::vertex::{DrawIdx, DrawVert};
use crate::core::config::GrowthPolicy;
use crate::error::BridgeResult;
use crate::foundation::collections::FrameBuffer;
use crate::ui::backend::HostCallbacks;

/// Combined buffers of one frame, as handed to the host
#[derive(Debug, Clone, Copy)]
pub struct BufferUpload<'a> {
    /// All vertices of the frame, list after list
    pub vertices: &'a [DrawVert],
    /// All indices of the frame, list after list; still relative to their list
    pub indices: &'a [DrawIdx],
}

impl<'a> BufferUpload<'a> {
    /// Vertex data as raw bytes
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Index data as raw bytes
    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.indices)
    }

    /// Length of the vertex data in bytes
    pub fn vertex_byte_len(&self) -> usize {
        std::mem::size_of_val(self.vertices)
    }

    /// Length of the index data in bytes
    pub fn index_byte_len(&self) -> usize {
        std::mem::size_of_val(self.indices)
    }
}

/// Owns the combined buffers and refills them every frame
///
/// Responsibilities:
/// - Validate the frame before touching the buffers
/// - Grow the buffers when a frame needs more room (never shrink)
/// - Copy list contents in list order, which fixes the offsets the replayer uses
/// - Hand the result to the host exactly once per non-empty frame
#[derive(Debug)]
pub struct DrawListBatcher {
    vertices: FrameBuffer<DrawVert>,
    indices: FrameBuffer<DrawIdx>,
    growth: GrowthPolicy,
    uploads: u64,
}

impl DrawListBatcher {
    /// Create a batcher with empty buffers
    pub fn new(growth: GrowthPolicy) -> Self {
        Self {
            vertices: FrameBuffer::new("vertex"),
            indices: FrameBuffer::new("index"),
            growth,
            uploads: 0,
        }
    }

    /// Create a batcher with room reserved up front
    pub fn with_capacity(growth: GrowthPolicy, vertices: usize, indices: usize) -> BridgeResult<Self> {
        Ok(Self {
            vertices: FrameBuffer::with_capacity("vertex", vertices)?,
            indices: FrameBuffer::with_capacity("index", indices)?,
            growth,
            uploads: 0,
        })
    }

    /// Fill the combined buffers from `draw_data`
    ///
    /// Returns `false` for a frame without geometry; the buffers are then left
    /// untouched apart from being emptied, and nothing is reallocated.
    pub fn batch(&mut self, draw_data: &DrawData) -> BridgeResult<bool> {
        draw_data.validate()?;

        if draw_data.is_empty() {
            self.vertices.clear();
            self.indices.clear();
            return Ok(false);
        }

        self.vertices.ensure_capacity(draw_data.total_vtx_count(), self.growth)?;
        self.indices.ensure_capacity(draw_data.total_idx_count(), self.growth)?;

        for list in &draw_data.cmd_lists {
            self.vertices.extend_from_slice(&list.vtx_buffer);
            self.indices.extend_from_slice(&list.idx_buffer);
        }

        log::trace!(
            "Batched {} draw lists: {} vertices, {} indices",
            draw_data.cmd_lists.len(),
            self.vertices.len(),
            self.indices.len()
        );
        Ok(true)
    }

    /// Batch the frame and upload it through the host
    ///
    /// Returns whether an upload happened. Empty frames are skipped rather than
    /// re-uploading the previous frame's stale content.
    pub fn upload<H: HostCallbacks + ?Sized>(
        &mut self,
        draw_data: &DrawData,
        host: &mut H,
    ) -> BridgeResult<bool> {
        if !self.batch(draw_data)? {
            log::trace!("Empty frame, skipping buffer upload");
            return Ok(false);
        }

        host.upload_buffers(&self.current_upload());
        self.uploads += 1;
        Ok(true)
    }

    /// View of the current combined buffers
    pub fn current_upload(&self) -> BufferUpload<'_> {
        BufferUpload {
            vertices: self.vertices.as_slice(),
            indices: self.indices.as_slice(),
        }
    }

    /// Vertex capacity of the combined buffer
    pub fn vertex_capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Index capacity of the combined buffer
    pub fn index_capacity(&self) -> usize {
        self.indices.capacity()
    }

    /// Total reallocations of both buffers
    pub fn reallocations(&self) -> u64 {
        self.vertices.reallocations() + self.indices.reallocations()
    }

    /// Number of uploads issued so far
    pub fn uploads(&self) -> u64 {
        self.uploads
    }
}
