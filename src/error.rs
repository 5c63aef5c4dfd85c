use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the pure transforms (primitives, graphics encoder, ciphers).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("size mismatch in {what}: expected {expected:#x}, got {actual:#x}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while running a title recipe.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// A required vendor file is absent. Fatal for the title only.
    #[error("{title}: missing input file {file}")]
    MissingInput { title: String, file: String },

    /// A content-hash lookup found no known variant. Callers treat this as
    /// "optional output omitted".
    #[error("{region}: unrecognized content (crc32 {checksum})")]
    UnrecognizedVariant { region: String, checksum: String },

    /// Output size inconsistent with the declared names or region size.
    #[error("{region}: {detail}")]
    SizeMismatch { region: String, detail: String },

    /// Nothing in the input directory matched a known title.
    #[error("no recognized title files found under {dir:?}")]
    UnsupportedLayout { dir: PathBuf },

    #[error("{region}: {source}")]
    Transform {
        region: String,
        #[source]
        source: TransformError,
    },

    /// The region needs cipher keys that have not been checked against a
    /// dumped board. Reported as a skipped region, never written.
    #[error("{region}: {cipher} key material is unverified, region not written")]
    UnverifiedKeys { region: String, cipher: String },

    #[error("reading {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("scanning {dir:?}: {source}")]
    Walk {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl RecipeError {
    pub fn transform(region: &str, source: TransformError) -> Self {
        RecipeError::Transform {
            region: region.to_string(),
            source,
        }
    }
}

pub type TransformResult<T> = Result<T, TransformError>;
