#![forbid(unsafe_code)]

//! Glint public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use glint_core::align::Align;
pub use glint_core::crop::{CroppedRectangle, Hierarchy, ParentGeometry, WidgetId};
pub use glint_core::geometry::{Coord, Margin, Point, Rect, Size, Vec2};
pub use glint_core::input::{PointerButtons, PointerState};

// --- Render re-exports -----------------------------------------------------

pub use glint_render::node::{AnimateContext, LayerNode, LayerNodeId, NodeAnimation};
pub use glint_render::target::{ClipRect, RenderTargetInfo};
pub use glint_render::vertex::{QuadCorner, Vertex, VertexQuad};

// --- Effects re-exports ----------------------------------------------------

pub use glint_effects::wobble::WobbleAnimator;

/// Convenience imports for applications.
pub mod prelude {
    pub use crate::{
        Align, AnimateContext, Coord, CroppedRectangle, Hierarchy, LayerNode, LayerNodeId, Margin,
        NodeAnimation, Point, PointerState, Rect, RenderTargetInfo, Size, Vertex, VertexQuad,
        WidgetId, WobbleAnimator,
    };
}
