//! Vertex types for UI rendering

/// Index type of the UI library's draw lists
pub type DrawIdx = u16;

/// Vertex produced by the UI library
///
/// Layout matches what the host shaders read: two floats of position, two floats of
/// texture coordinate, then the color packed as RGBA bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawVert {
    /// Position in screen pixels
    pub pos: [f32; 2],
    /// Texture coordinates into the font atlas
    pub uv: [f32; 2],
    /// Packed color, red in the lowest byte
    pub col: u32,
}

// SAFETY: repr(C), only f32/u32 fields, no padding (20 bytes).
unsafe impl bytemuck::Zeroable for DrawVert {}
unsafe impl bytemuck::Pod for DrawVert {}

impl DrawVert {
    /// Size of one vertex in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Create a vertex
    pub const fn new(pos: [f32; 2], uv: [f32; 2], col: u32) -> Self {
        Self { pos, uv, col }
    }

    /// Pack 8-bit channels the way the UI library stores colors
    pub const fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
        (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
    }
}
