#![deny(unsafe_code)]

//! Render-layer contracts.
//!
//! # Role in Glint
//! `glint-render` is the seam between widget state and a graphics
//! backend. It defines the per-frame projection metrics a render target
//! advertises, the vertex/quad data animators fill, and the layer-node
//! contract that drives animation every frame. It does not talk to a GPU;
//! backends consume the plain vertex data it produces.
//!
//! # Primary responsibilities
//! - **RenderTargetInfo**: pixel-to-clip projection for one target.
//! - **Vertex / VertexQuad**: plain-old-data quad geometry.
//! - **LayerNode / NodeAnimation**: registration and the frame-synchronous
//!   drive loop for per-node animation drivers.

pub mod node;
pub mod target;
pub mod vertex;
