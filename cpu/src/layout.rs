//! Vertex input layout of the vertex stage, as Vulkan descriptions.

use std::mem::{offset_of, size_of};

use ash::vk;

use crate::Vertex;

pub const BINDING: u32 = 0;
pub const POSITION_LOCATION: u32 = 0;
pub const COLOR_LOCATION: u32 = 1;
pub const VERTEX_STRIDE: u32 = size_of::<Vertex>() as u32;

const FLOAT4: vk::Format = vk::Format::R32G32B32A32_SFLOAT;

pub fn binding_description() -> vk::VertexInputBindingDescription {
    vk::VertexInputBindingDescription::default()
        .binding(BINDING)
        .stride(VERTEX_STRIDE)
        .input_rate(vk::VertexInputRate::VERTEX)
}

pub fn attribute_descriptions() -> [vk::VertexInputAttributeDescription; 2] {
    let attribute = |location, offset: usize| {
        vk::VertexInputAttributeDescription::default()
            .location(location)
            .binding(BINDING)
            .format(FLOAT4)
            .offset(offset as u32)
    };
    [
        attribute(POSITION_LOCATION, offset_of!(Vertex, position)),
        attribute(COLOR_LOCATION, offset_of!(Vertex, color)),
    ]
}

/// Byte view of `vertices`, ready to copy into a buffer bound at [`BINDING`].
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
