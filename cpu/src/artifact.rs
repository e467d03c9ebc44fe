//! Locating and decoding the compiled SPIR-V module.
//!
//! The `shaders` crate compiles the module into its own target directory,
//! which is where the loader looks by default. Setting `PASSTHROUGH_SPV`
//! points it somewhere else, e.g. at a module built by `cargo gpu`.

use std::{
    env, fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use ash::util::read_spv;
use log::{debug, info};

use crate::ShaderError;

pub const SPIRV_PATH_ENV: &str = "PASSTHROUGH_SPV";

/// Where `cargo build` in `shaders/` leaves the module.
pub const DEFAULT_SPIRV_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../shaders/target/spirv-builder/spirv-unknown-spv1.0/release/deps/passthrough_shader.spv"
);

/// Path of the SPIR-V module, preferring `PASSTHROUGH_SPV` over the
/// default build output.
pub fn spirv_path() -> Result<PathBuf, ShaderError> {
    resolve(
        env::var_os(SPIRV_PATH_ENV).map(PathBuf::from),
        Path::new(DEFAULT_SPIRV_PATH),
    )
}

fn resolve(runtime: Option<PathBuf>, default: &Path) -> Result<PathBuf, ShaderError> {
    if let Some(path) = runtime.filter(|path| !path.as_os_str().is_empty()) {
        debug!("using SPIR-V module from ${SPIRV_PATH_ENV}: {}", path.display());
        return Ok(path);
    }
    if default.is_file() {
        return Ok(default.to_owned());
    }
    debug!("no SPIR-V module at {}", default.display());
    Err(ShaderError::NotBuilt)
}

pub fn load() -> Result<Vec<u32>, ShaderError> {
    load_from(spirv_path()?)
}

pub fn load_from(path: impl AsRef<Path>) -> Result<Vec<u32>, ShaderError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ShaderError::Read {
        path: path.to_owned(),
        source,
    })?;
    let words = decode(&bytes)?;
    info!("loaded SPIR-V module {} ({} words)", path.display(), words.len());
    Ok(words)
}

/// Converts raw bytes into SPIR-V words, fixing up byte-swapped modules.
pub fn decode(bytes: &[u8]) -> Result<Vec<u32>, ShaderError> {
    read_spv(&mut Cursor::new(bytes)).map_err(ShaderError::InvalidSpirv)
}
