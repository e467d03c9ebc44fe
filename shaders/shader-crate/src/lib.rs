//! Pass-through vertex and fragment stages.
//!
//! The vertex stage copies its record to the rasterizer untouched and the
//! fragment stage writes the interpolated color as-is. Both stages are also
//! plain functions on the CPU, which is what the host crate and the tests use.
#![cfg_attr(target_arch = "spirv", no_std)]
#![allow(unexpected_cfgs)]
use spirv_std::{glam::Vec4, spirv};

pub use spirv_std::glam;

/// One vertex as the host lays it out in the vertex buffer.
///
/// `position` is attribute 0 and `color` is attribute 1, both four floats,
/// giving a 32 byte stride.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    not(target_arch = "spirv"),
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
#[repr(C)]
pub struct Vertex {
    pub position: Vec4,
    pub color: Vec4,
}

impl Vertex {
    pub const fn new(position: Vec4, color: Vec4) -> Self {
        Self { position, color }
    }
}

/// What the vertex stage hands to the rasterizer, and after interpolation
/// what the fragment stage receives.
///
/// On the fragment side `position` is the window-space fragment coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct VertexOutput {
    pub position: Vec4,
    pub color: Vec4,
}

/// Hands the vertex to the rasterizer unchanged.
pub const fn vertex_stage(input: Vertex) -> VertexOutput {
    VertexOutput {
        position: input.position,
        color: input.color,
    }
}

/// Returns the interpolated color verbatim. Alpha is not premultiplied.
pub const fn fragment_stage(input: VertexOutput) -> Vec4 {
    input.color
}

// Inputs take locations in declaration order: `position` is 0, `color` is 1.
#[allow(dead_code)]
#[spirv(vertex)]
pub fn vertex_main(
    position: Vec4,
    color: Vec4,
    #[spirv(position)] out_position: &mut Vec4,
    out_color: &mut Vec4,
) {
    let out = vertex_stage(Vertex::new(position, color));
    *out_position = out.position;
    *out_color = out.color;
}

#[allow(dead_code)]
#[spirv(fragment)]
pub fn fragment_main(
    #[spirv(frag_coord)] frag_coord: Vec4,
    color: Vec4,
    output: &mut Vec4,
) {
    *output = fragment_stage(VertexOutput {
        position: frag_coord,
        color,
    });
}
