#![forbid(unsafe_code)]

//! Render-target projection metrics.
//!
//! A render target hands the same small struct to every driver each
//! frame: scale and offset from pixel space into clip space, the depth
//! value overlay quads render at, and whether the target's texture space
//! is vertically flipped (render-to-texture targets usually are).

use glint_core::geometry::Coord;

/// Per-frame projection metrics for one render target. Read-only for
/// consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTargetInfo {
    /// Horizontal pixel-to-[0,1] scale (1 / viewport width).
    pub pix_scale_x: f32,
    /// Vertical pixel-to-[0,1] scale (1 / viewport height).
    pub pix_scale_y: f32,
    /// Horizontal offset applied before expansion to clip space.
    pub h_offset: f32,
    /// Vertical offset applied before expansion to clip space.
    pub v_offset: f32,
    /// Depth value overlay geometry renders at.
    pub maximum_depth: f32,
    /// Whether texture coordinates are flipped vertically.
    pub flip_y: bool,
}

/// A clip-space quad region. `height` is negative for y-up clip space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RenderTargetInfo {
    /// Metrics for a plain viewport: unit scale over the extent, no
    /// offsets, depth 1.0, no flip.
    #[must_use]
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self {
            pix_scale_x: 1.0 / width as f32,
            pix_scale_y: 1.0 / height as f32,
            h_offset: 0.0,
            v_offset: 0.0,
            maximum_depth: 1.0,
            flip_y: false,
        }
    }

    #[must_use]
    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    /// A pixel x position in clip space ([-1, 1], right positive).
    #[inline]
    pub fn clip_x(&self, x: f32) -> f32 {
        ((self.pix_scale_x * x + self.h_offset) * 2.0) - 1.0
    }

    /// A pixel y position in clip space ([-1, 1], up positive).
    #[inline]
    pub fn clip_y(&self, y: f32) -> f32 {
        -(((self.pix_scale_y * y + self.v_offset) * 2.0) - 1.0)
    }

    /// A pixel width as a clip-space extent.
    #[inline]
    pub fn clip_width(&self, width: f32) -> f32 {
        self.pix_scale_x * width * 2.0
    }

    /// A pixel height as a clip-space extent (negative: y grows up).
    #[inline]
    pub fn clip_height(&self, height: f32) -> f32 {
        -(self.pix_scale_y * height * 2.0)
    }

    /// Project a screen-space widget coordinate to its clip-space quad.
    #[must_use]
    pub fn project(&self, coord: Coord) -> ClipRect {
        ClipRect {
            left: self.clip_x(coord.x as f32),
            top: self.clip_y(coord.y as f32),
            width: self.clip_width(coord.width as f32),
            height: self.clip_height(coord.height as f32),
        }
    }
}
