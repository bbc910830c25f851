//! Per-frame draw output of the UI library

use super::vertex::{DrawIdx, DrawVert};
use crate::error::{BridgeError, BridgeResult};

/// Clip rectangle of a draw command, in screen pixels
///
/// Field names follow the UI library: `z` is the right edge and `w` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Right edge
    pub z: f32,
    /// Bottom edge
    pub w: f32,
}

impl ClipRect {
    /// Create a clip rectangle from its edges
    pub const fn new(x: f32, y: f32, right: f32, bottom: f32) -> Self {
        Self { x, y, z: right, w: bottom }
    }

    /// Right edge
    pub const fn right(&self) -> f32 {
        self.z
    }

    /// Bottom edge
    pub const fn bottom(&self) -> f32 {
        self.w
    }

    /// Edges truncated to integers, for hosts whose scissor takes ints
    pub fn to_scissor(&self) -> (i32, i32, i32, i32) {
        (self.x as i32, self.y as i32, self.z as i32, self.w as i32)
    }
}

/// Draw a contiguous run of indices under a clip rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Scissor rectangle
    pub clip_rect: ClipRect,
    /// Number of indices consumed, taken in order from the list's index buffer
    pub elem_count: u32,
}

impl DrawCommand {
    /// Create a draw command
    pub const fn new(clip_rect: ClipRect, elem_count: u32) -> Self {
        Self { clip_rect, elem_count }
    }
}

/// One batch of geometry for a group of UI elements
///
/// Indices are relative to this list's own vertex buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// Vertices
    pub vtx_buffer: Vec<DrawVert>,
    /// Indices into `vtx_buffer`
    pub idx_buffer: Vec<DrawIdx>,
    /// Commands, each consuming the next `elem_count` indices
    pub cmd_buffer: Vec<DrawCommand>,
}

impl DrawList {
    /// Create a draw list
    pub fn new(
        vtx_buffer: Vec<DrawVert>,
        idx_buffer: Vec<DrawIdx>,
        cmd_buffer: Vec<DrawCommand>,
    ) -> Self {
        Self { vtx_buffer, idx_buffer, cmd_buffer }
    }

    /// Sum of the element counts of all commands
    pub fn command_elem_total(&self) -> usize {
        self.cmd_buffer.iter().map(|cmd| cmd.elem_count as usize).sum()
    }

    /// Check that the commands consume exactly the list's indices
    ///
    /// `position` is the list's place in the frame, reported in the error.
    pub fn validate(&self, position: usize) -> BridgeResult<()> {
        let actual = self.command_elem_total();
        if actual != self.idx_buffer.len() {
            return Err(BridgeError::MalformedDrawList {
                list: position,
                expected: self.idx_buffer.len(),
                actual,
            });
        }
        Ok(())
    }
}

/// Everything the UI library produced for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawData {
    /// Draw lists in submission order
    pub cmd_lists: Vec<DrawList>,
}

impl DrawData {
    /// Wrap the lists of a frame
    pub fn new(cmd_lists: Vec<DrawList>) -> Self {
        Self { cmd_lists }
    }

    /// Vertex count across all lists
    pub fn total_vtx_count(&self) -> usize {
        self.cmd_lists.iter().map(|list| list.vtx_buffer.len()).sum()
    }

    /// Index count across all lists
    pub fn total_idx_count(&self) -> usize {
        self.cmd_lists.iter().map(|list| list.idx_buffer.len()).sum()
    }

    /// Command count across all lists
    pub fn total_cmd_count(&self) -> usize {
        self.cmd_lists.iter().map(|list| list.cmd_buffer.len()).sum()
    }

    /// Whether the frame has no geometry at all
    pub fn is_empty(&self) -> bool {
        self.total_vtx_count() == 0 && self.total_idx_count() == 0
    }

    /// Validate every list, and that the running offsets of the whole frame fit in
    /// the 32-bit offsets handed to the host
    pub fn validate(&self) -> BridgeResult<()> {
        let mut vertex_offset: u32 = 0;
        let mut index_offset: u32 = 0;
        for (position, list) in self.cmd_lists.iter().enumerate() {
            list.validate(position)?;
            vertex_offset = advance_offset(vertex_offset, list.vtx_buffer.len(), position, "vertex")?;
            index_offset = advance_offset(index_offset, list.idx_buffer.len(), position, "index")?;
        }
        Ok(())
    }
}

/// Move a combined-buffer offset past `count` elements of list `position`
pub(crate) fn advance_offset(
    offset: u32,
    count: usize,
    position: usize,
    what: &'static str,
) -> BridgeResult<u32> {
    u32::try_from(count)
        .ok()
        .and_then(|count| offset.checked_add(count))
        .ok_or(BridgeError::OffsetOverflow { list: position, what })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(vertices: usize, indices: usize, counts: &[u32]) -> DrawList {
        DrawList::new(
            vec![DrawVert::default(); vertices],
            vec![0; indices],
            counts
                .iter()
                .map(|&count| DrawCommand::new(ClipRect::new(0.0, 0.0, 10.0, 10.0), count))
                .collect(),
        )
    }

    #[test]
    fn test_totals() {
        let data = DrawData::new(vec![list(3, 3, &[3]), list(5, 9, &[4, 5])]);
        assert_eq!(data.total_vtx_count(), 8);
        assert_eq!(data.total_idx_count(), 12);
        assert_eq!(data.total_cmd_count(), 3);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_short_commands_are_rejected() {
        let data = DrawData::new(vec![list(3, 3, &[3]), list(5, 9, &[4, 4])]);
        match data.validate() {
            Err(BridgeError::MalformedDrawList { list, expected, actual }) => {
                assert_eq!(list, 1);
                assert_eq!(expected, 9);
                assert_eq!(actual, 8);
            }
            other => panic!("expected malformed list error, got {other:?}"),
        }
    }

    #[test]
    fn test_overlong_commands_are_rejected() {
        let data = DrawData::new(vec![list(4, 6, &[6, 1])]);
        assert!(matches!(
            data.validate(),
            Err(BridgeError::MalformedDrawList { list: 0, expected: 6, actual: 7 })
        ));
    }

    #[test]
    fn test_offset_past_u32_is_rejected() {
        assert_eq!(advance_offset(10, 5, 0, "vertex").unwrap(), 15);
        assert_eq!(advance_offset(u32::MAX - 2, 2, 0, "index").unwrap(), u32::MAX);
        assert!(matches!(
            advance_offset(u32::MAX - 1, 2, 4, "vertex"),
            Err(BridgeError::OffsetOverflow { list: 4, what: "vertex" })
        ));
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            advance_offset(0, u32::MAX as usize + 1, 1, "index"),
            Err(BridgeError::OffsetOverflow { list: 1, what: "index" })
        ));
    }

    #[test]
    fn test_scissor_truncates() {
        let clip = ClipRect::new(1.9, 2.2, 799.99, 600.0);
        assert_eq!(clip.to_scissor(), (1, 2, 799, 600));
        assert_eq!(clip.right(), 799.99);
        assert_eq!(clip.bottom(), 600.0);
    }
}
