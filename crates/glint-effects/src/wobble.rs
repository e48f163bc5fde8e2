#![forbid(unsafe_code)]

//! Wobble deformation animator.
//!
//! Watches a widget's absolute coordinate frame-to-frame and turns every
//! move or resize into an impulse on a small physical system. While the
//! system is excited, the widget's single quad is replaced by a 16×16
//! quad lattice whose vertices are displaced with a smooth falloff, so
//! the surface appears to lag and wobble behind the motion.
//!
//! # State machine
//!
//! A fresh animator is inactive and produces no geometry.
//! [`WobbleAnimator::create`] activates it, [`WobbleAnimator::destroy`]
//! deactivates it again; the owning layer node is expected to destroy the
//! driver before dropping it.
//!
//! # Classification
//!
//! Each active frame classifies the coordinate delta against the
//! previously observed coordinate into exactly one branch, in priority
//! order: both position and size changed (treated as a move, anchor reset
//! to the center), only size changed (symmetric resize deformation), only
//! position changed (deformation anchored at the pointer). The order is
//! load-bearing: when both fields change in one frame the move branch
//! must win.
//!
//! # Integration
//!
//! The displacement/inertia pair forms a coupled damped oscillator:
//! inertia feeds displacement, decays exponentially, and is damped by the
//! prior displacement, which produces an overshoot-and-settle wobble
//! rather than a plain exponential return.
//!
//! # Invariants
//!
//! 1. Inertia magnitude never exceeds [`INERTIA_CEILING`] after an
//!    impulse; rescaling preserves direction and only divides by a
//!    provably non-zero length.
//! 2. Absent new impulses the displacement relaxes toward zero, and once
//!    its squared magnitude drops under the settle threshold the driver
//!    reports zero quads.
//! 3. The elapsed time fed to the integrator is capped at
//!    [`MAX_FRAME_STEP`] so a long frame cannot blow the system up.
//! 4. The mesh is regenerated whole on every excited frame; nothing is
//!    patched across frames.

use glint_core::geometry::{Coord, Point, Vec2};
use glint_render::node::{AnimateContext, LayerNodeId, NodeAnimation};
use glint_render::vertex::{QuadCorner, Vertex, VertexQuad};
use tracing::{debug, trace, warn};

/// Hard cap on accumulated inertia magnitude.
pub const INERTIA_CEILING: f32 = 50.0;

/// Longest time slice the integrator will accept, in seconds.
pub const MAX_FRAME_STEP: f32 = 0.05;

/// Squared displacement below which the animation counts as settled.
const SETTLE_THRESHOLD_SQ: f32 = 0.3;

/// Base rate multiplier for the oscillator.
const SPEED: f32 = 4.0;
/// Inertia-to-displacement gain.
const DRAG_GAIN: f32 = 5.0;
/// Exponential decay rate of inertia.
const INERTIA_DECAY: f32 = 5.0;
/// Damping of inertia by the prior displacement.
const DRAG_COUPLING: f32 = 4.0;

/// Quads per axis in the deformation lattice.
const GRID_QUADS: usize = 16;

const DEFAULT_DRAG_STRENGTH: f32 = 0.001;
const DEFAULT_RESIZE_STRENGTH: f32 = 0.0009;

/// Springy full-mesh deformation of a widget quad, driven by the
/// widget's own movement.
#[derive(Debug, Clone)]
pub struct WobbleAnimator {
    prev_coord: Coord,
    inertia: Vec2,
    anchor: Vec2,
    resize_mode: bool,
    drag_offset: Vec2,
    drag_strength: f32,
    resize_strength: f32,
    active: bool,
    node: Option<LayerNodeId>,
}

impl Default for WobbleAnimator {
    fn default() -> Self {
        Self {
            prev_coord: Coord::ZERO,
            inertia: Vec2::ZERO,
            anchor: Vec2::ZERO,
            resize_mode: false,
            drag_offset: Vec2::ZERO,
            drag_strength: DEFAULT_DRAG_STRENGTH,
            resize_strength: DEFAULT_RESIZE_STRENGTH,
            active: false,
            node: None,
        }
    }
}

impl WobbleAnimator {
    /// A new, inactive animator with default strengths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the driver; it starts tracking coordinates and producing
    /// geometry on the next frame.
    pub fn create(&mut self) {
        debug!("wobble animator created");
        self.active = true;
    }

    /// Deactivate the driver. Subsequent frames produce no geometry and
    /// mutate no state.
    pub fn destroy(&mut self) {
        debug!("wobble animator destroyed");
        self.active = false;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the current deformation is the symmetric resize style
    /// (falloff from the two far corners) rather than the anchored drag
    /// style.
    #[inline]
    pub fn is_resize_mode(&self) -> bool {
        self.resize_mode
    }

    /// Deformation focal point in the widget's normalized [0,1]² space.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[inline]
    pub fn inertia(&self) -> Vec2 {
        self.inertia
    }

    /// Current visible displacement of the mesh.
    #[inline]
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    #[inline]
    pub fn drag_strength(&self) -> f32 {
        self.drag_strength
    }

    #[inline]
    pub fn resize_strength(&self) -> f32 {
        self.resize_strength
    }

    /// The layer node this driver is registered on, if any.
    #[inline]
    pub fn attached_node(&self) -> Option<LayerNodeId> {
        self.node
    }

    /// Apply a key/value property list, as handed over by a skin or
    /// layout loader.
    ///
    /// `DragStrength` and `ResizeStrength` are parsed as floats; a
    /// malformed value keeps the previous setting. Keys belonging to
    /// other drivers are ignored.
    pub fn apply_properties<'a, I>(&mut self, properties: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in properties {
            match key {
                "DragStrength" => {
                    self.drag_strength = parse_strength(key, value).unwrap_or(self.drag_strength);
                }
                "ResizeStrength" => {
                    self.resize_strength =
                        parse_strength(key, value).unwrap_or(self.resize_strength);
                }
                _ => {}
            }
        }
    }

    /// Classify the frame's coordinate delta and convert it into an
    /// impulse. Exactly one branch fires; priority matters.
    fn observe_coord(&mut self, coord: Coord, pointer: Point) {
        let old = self.prev_coord;

        if old.size() != coord.size() && old.point() != coord.point() {
            self.anchor = Vec2::new(0.5, 0.5);
            self.resize_mode = false;
            self.add_impulse(Vec2::new(
                (coord.x - old.x) as f32,
                (coord.y - old.y) as f32,
            ));
        } else if old.size() != coord.size() {
            self.resize_mode = true;
            self.add_impulse(Vec2::new(
                (coord.width - old.width) as f32,
                (coord.height - old.height) as f32,
            ));
        } else if old.point() != coord.point() {
            self.anchor = Vec2::new(
                (pointer.x - coord.x) as f32 / coord.width as f32,
                (pointer.y - coord.y) as f32 / coord.height as f32,
            );
            self.resize_mode = false;
            self.add_impulse(Vec2::new(
                (coord.x - old.x) as f32,
                (coord.y - old.y) as f32,
            ));
        }

        self.prev_coord = coord;
    }

    fn add_impulse(&mut self, delta: Vec2) {
        self.inertia = (self.inertia + delta).clamp_length(INERTIA_CEILING);
    }

    /// One integrator step. `previous` displacement damps the inertia, so
    /// the system overshoots and rings down instead of decaying flatly.
    fn integrate(&mut self, elapsed: f32) {
        let dt = elapsed.min(MAX_FRAME_STEP);
        let previous = self.drag_offset;

        self.drag_offset += self.inertia * (DRAG_GAIN * SPEED * dt);
        self.inertia += self.inertia * (-INERTIA_DECAY * SPEED * dt);
        self.inertia += previous * (-DRAG_COUPLING * SPEED * dt);
    }

    fn build_mesh(&self, ctx: &AnimateContext<'_>, out: &mut Vec<VertexQuad>) -> usize {
        let clip = ctx.target.project(ctx.coord);
        let depth = ctx.target.maximum_depth;
        let tex_u = ctx.coord.width as f32 / ctx.texture_size.width as f32;
        let tex_v = ctx.coord.height as f32 / ctx.texture_size.height as f32;

        let base = out.len();
        out.resize(base + GRID_QUADS * GRID_QUADS, VertexQuad::default());

        for rx in 0..=GRID_QUADS {
            for ry in 0..=GRID_QUADS {
                let point = Vec2::new(
                    rx as f32 / GRID_QUADS as f32,
                    ry as f32 / GRID_QUADS as f32,
                );

                let falloff = if self.resize_mode {
                    let near = point.distance_squared(Vec2::ZERO) * self.resize_strength;
                    let far = point.distance_squared(Vec2::new(1.0, 1.0)) * self.resize_strength;
                    near.min(far)
                } else {
                    self.anchor.distance_squared(point) * self.drag_strength
                };

                let x = clip.left + clip.width * point.x - self.drag_offset.x * falloff;
                let y = clip.top + clip.height * point.y + self.drag_offset.y * falloff;

                let u = point.x * tex_u;
                let mut v = point.y * tex_v;
                if ctx.target.flip_y {
                    v = 1.0 - v;
                }

                let vertex = Vertex::new([x, y, depth], [u, v], Vertex::WHITE);

                // A lattice point feeds every adjacent quad's matching
                // corner, so neighbours share it by value.
                if rx < GRID_QUADS && ry < GRID_QUADS {
                    out[base + rx + ry * GRID_QUADS].set_corner(QuadCorner::LeftTop, vertex);
                }
                if rx > 0 && ry > 0 {
                    out[base + (rx - 1) + (ry - 1) * GRID_QUADS]
                        .set_corner(QuadCorner::RightBottom, vertex);
                }
                if rx > 0 && ry < GRID_QUADS {
                    out[base + (rx - 1) + ry * GRID_QUADS].set_corner(QuadCorner::RightTop, vertex);
                }
                if rx < GRID_QUADS && ry > 0 {
                    out[base + rx + (ry - 1) * GRID_QUADS].set_corner(QuadCorner::LeftBottom, vertex);
                }
            }
        }

        GRID_QUADS * GRID_QUADS
    }
}

impl NodeAnimation for WobbleAnimator {
    fn attached(&mut self, node: LayerNodeId) {
        debug!(node = node.0, "wobble animator attached");
        self.node = Some(node);
    }

    fn animate(&mut self, ctx: &AnimateContext<'_>, out: &mut Vec<VertexQuad>) -> usize {
        if !self.active {
            return 0;
        }

        self.observe_coord(ctx.coord, ctx.pointer.position);
        self.integrate(ctx.elapsed.as_secs_f32());

        if self.drag_offset.length_squared() < SETTLE_THRESHOLD_SQ {
            return 0;
        }

        let quads = self.build_mesh(ctx, out);
        trace!(quads, "wobble mesh rebuilt");
        quads
    }
}

fn parse_strength(key: &str, value: &str) -> Option<f32> {
    match value.trim().parse::<f32>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(key, value, "ignoring malformed animator property");
            None
        }
    }
}
