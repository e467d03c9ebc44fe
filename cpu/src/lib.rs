//! Host-side interface of the pass-through pipeline.
//!
//! The shaders themselves live in `passthrough-shader`. This crate carries
//! what a Vulkan host needs to bind them: the compiled SPIR-V module
//! ([`artifact`]), the entry points ([`ShaderStage`]) and the vertex input
//! layout ([`layout`]). Creating the pipeline is left to the host.

pub mod artifact;
mod error;
pub mod layout;
mod stage;

pub use error::ShaderError;
pub use passthrough_shader::{fragment_stage, glam, vertex_stage, Vertex, VertexOutput};
pub use stage::ShaderStage;

use glam::Vec4;

/// Red, green and blue corners of a triangle in clip space.
pub const DEMO_TRIANGLE: [Vertex; 3] = [
    Vertex::new(Vec4::new(0.0, 0.5, 0.0, 1.0), Vec4::new(1.0, 0.0, 0.0, 1.0)),
    Vertex::new(Vec4::new(-0.5, -0.5, 0.0, 1.0), Vec4::new(0.0, 1.0, 0.0, 1.0)),
    Vertex::new(Vec4::new(0.5, -0.5, 0.0, 1.0), Vec4::new(0.0, 0.0, 1.0, 1.0)),
];
