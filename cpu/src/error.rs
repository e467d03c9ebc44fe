use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ShaderError {
    #[error(
        "no SPIR-V module available, run `cargo build` in `shaders/` or set `PASSTHROUGH_SPV`"
    )]
    NotBuilt,
    #[error("failed to read SPIR-V module {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid SPIR-V module: {0}")]
    InvalidSpirv(#[source] io::Error),
}
