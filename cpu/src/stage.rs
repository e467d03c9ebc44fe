use std::ffi::CStr;

use ash::vk;

/// The two programmable stages of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Both stages in pipeline order.
    pub const ALL: [Self; 2] = [Self::Vertex, Self::Fragment];

    /// Entry point name inside the SPIR-V module.
    pub const fn entry_point(self) -> &'static CStr {
        match self {
            Self::Vertex => c"vertex_main",
            Self::Fragment => c"fragment_main",
        }
    }

    /// Vulkan stage bit for this stage.
    pub const fn flags(self) -> vk::ShaderStageFlags {
        match self {
            Self::Vertex => vk::ShaderStageFlags::VERTEX,
            Self::Fragment => vk::ShaderStageFlags::FRAGMENT,
        }
    }

    /// Stage info for `module`. Specialization and flags are left empty.
    pub fn create_info(
        self,
        module: vk::ShaderModule,
    ) -> vk::PipelineShaderStageCreateInfo<'static> {
        vk::PipelineShaderStageCreateInfo::default()
            .stage(self.flags())
            .module(module)
            .name(self.entry_point())
    }
}
