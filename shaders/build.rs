use spirv_builder::{MetadataPrintout, SpirvBuilder};

#[path = "src/entry_points.rs"]
mod entry_points;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-env-changed=PASSTHROUGH_SHADER_TARGET");
    let target = std::env::var("PASSTHROUGH_SHADER_TARGET")
        .unwrap_or_else(|_| "spirv-unknown-spv1.0".to_owned());
    let result = SpirvBuilder::new("shader-crate", target)
        .print_metadata(MetadataPrintout::DependencyOnly)
        .build()?;
    entry_points::check(&result.entry_points)?;
    let module = result.module.unwrap_single();
    println!("cargo:rustc-env=PASSTHROUGH_SPV={}", module.display());
    Ok(())
}
