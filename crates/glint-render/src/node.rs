#![forbid(unsafe_code)]

//! Layer nodes and their animation drivers.
//!
//! A layer node owns the animation drivers registered on it and drives
//! them serially once per rendered frame, in registration order. Drivers
//! keep at most a [`LayerNodeId`] back-reference; the node owns their
//! lifetime from registration until it drops them.
//!
//! The whole contract is frame-synchronous and single-threaded: nothing
//! here suspends, and a driver is never invoked twice concurrently.

use crate::target::RenderTargetInfo;
use crate::vertex::VertexQuad;
use glint_core::geometry::{Coord, Size};
use glint_core::input::PointerState;
use std::time::Duration;
use tracing::trace;

/// Identity of a layer node, handed to drivers on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerNodeId(pub u32);

/// Everything a driver consumes for one frame. Passing the pointer state
/// explicitly keeps the animate call pure given its inputs.
#[derive(Debug, Clone, Copy)]
pub struct AnimateContext<'a> {
    /// Wall-clock time since the previous frame.
    pub elapsed: Duration,
    /// Projection metrics of the target being rendered to.
    pub target: &'a RenderTargetInfo,
    /// The widget's current absolute (screen-space) coordinate.
    pub coord: Coord,
    /// Extent of the texture the widget's quad samples.
    pub texture_size: Size,
    /// Pointer snapshot for this frame.
    pub pointer: PointerState,
}

/// A per-frame mesh/animation driver bound to a layer node.
pub trait NodeAnimation {
    /// Called once when the driver is registered on a node.
    fn attached(&mut self, node: LayerNodeId) {
        let _ = node;
    }

    /// Produce this frame's geometry.
    ///
    /// Appends whole quads to `out` and returns how many were appended.
    /// Zero means there is nothing to render this frame, either because
    /// the driver is idle or because its animation has settled. The buffer is
    /// caller-owned scratch: a driver must fully regenerate its geometry
    /// on every active frame rather than patch a previous frame's output.
    fn animate(&mut self, ctx: &AnimateContext<'_>, out: &mut Vec<VertexQuad>) -> usize;
}

/// A render-layer node: a slot in the layer's draw order that animation
/// drivers can be registered on.
pub struct LayerNode {
    id: LayerNodeId,
    animations: Vec<Box<dyn NodeAnimation>>,
    quads: Vec<VertexQuad>,
}

impl LayerNode {
    #[must_use]
    pub fn new(id: LayerNodeId) -> Self {
        Self {
            id,
            animations: Vec::new(),
            quads: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> LayerNodeId {
        self.id
    }

    /// Register a driver. The node takes ownership and notifies the
    /// driver of its new home.
    pub fn add_animation(&mut self, mut animation: Box<dyn NodeAnimation>) {
        animation.attached(self.id);
        self.animations.push(animation);
    }

    #[inline]
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Drive every registered driver once, in registration order, and
    /// collect their quads for this frame. Returns the total quad count.
    pub fn animate(&mut self, ctx: &AnimateContext<'_>) -> usize {
        self.quads.clear();
        let mut total = 0;
        for animation in &mut self.animations {
            total += animation.animate(ctx, &mut self.quads);
        }
        trace!(node = self.id.0, quads = total, "layer node animated");
        total
    }

    /// The quads produced by the most recent [`animate`](Self::animate)
    /// call.
    #[inline]
    pub fn quads(&self) -> &[VertexQuad] {
        &self.quads
    }
}

impl std::fmt::Debug for LayerNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerNode")
            .field("id", &self.id)
            .field("animations", &self.animations.len())
            .field("quads", &self.quads.len())
            .finish()
    }
}
