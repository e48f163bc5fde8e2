// bytemuck's derives expand to `unsafe impl` blocks, so this module is
// exempt from the crate-wide unsafe_code lint.
#![allow(unsafe_code)]

//! Plain-old-data quad geometry.
//!
//! Animators fill caller-supplied [`VertexQuad`] buffers; a backend can
//! upload them byte-for-byte (`bytemuck` casts) without any repacking.
//! Quads in a deformation mesh share lattice vertices by value: one
//! lattice point is written into the matching corner of every quad that
//! touches it.

use bytemuck::{Pod, Zeroable};

/// One vertex of an overlay quad: clip-space position, texture
/// coordinate, packed RGBA colour.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coord: [f32; 2],
    pub color: u32,
}

impl Vertex {
    /// Opaque white, the neutral modulation colour.
    pub const WHITE: u32 = 0xFFFF_FFFF;

    #[inline]
    pub const fn new(position: [f32; 3], tex_coord: [f32; 2], color: u32) -> Self {
        Self {
            position,
            tex_coord,
            color,
        }
    }
}

/// Corner slot inside a [`VertexQuad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadCorner {
    LeftTop = 0,
    RightTop = 1,
    LeftBottom = 2,
    RightBottom = 3,
}

/// Four shared-corner vertices of one screen quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct VertexQuad {
    corners: [Vertex; 4],
}

impl VertexQuad {
    pub const CORNER_COUNT: usize = 4;

    #[inline]
    pub fn corner(&self, corner: QuadCorner) -> Vertex {
        self.corners[corner as usize]
    }

    #[inline]
    pub fn set_corner(&mut self, corner: QuadCorner, vertex: Vertex) {
        self.corners[corner as usize] = vertex;
    }

    #[inline]
    pub fn corners(&self) -> &[Vertex; 4] {
        &self.corners
    }
}
