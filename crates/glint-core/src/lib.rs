#![forbid(unsafe_code)]

//! Core: geometry, alignment, and the cropped-rectangle layout algebra.
//!
//! # Role in Glint
//! `glint-core` owns the coordinate model every widget composes through:
//! pixel-space value types, anchoring flags, and the margin-based clipping
//! state a hierarchy of rectangles accumulates against its ancestors.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`/`Size`/`Coord`/`Rect`/`Margin`/`Vec2` values.
//! - **Align**: per-axis anchoring and stretch flags, applied top-down
//!   when parents resize.
//! - **CroppedRectangle / Hierarchy**: clipping margins, cached absolute
//!   positions, and the batched view-update pass.
//! - **PointerState**: the explicit input snapshot per-frame callers pass
//!   down instead of querying a global input manager.
//!
//! # How it fits in the system
//! The render layer (`glint-render`) consumes resolved coordinates and
//! pointer snapshots from here; effect drivers (`glint-effects`) read the
//! same types per frame. Nothing in this crate touches a GPU or a clock.

pub mod align;
pub mod crop;
pub mod geometry;
pub mod input;
