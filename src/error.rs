use std::path::PathBuf;

/// The primary error type for all operations in the `zipspan` crate.
#[derive(Debug)]
pub enum SpanError {
    /// An I/O error occurred, typically while reading a source file or
    /// writing a part. Includes the path where the error happened.
    Io { source: std::io::Error, path: PathBuf },

    /// An error from the underlying `zip` crate while writing an entry.
    Zip(zip::result::ZipError),

    /// A wrapper for any other error that doesn't fit the specific variants.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl std::fmt::Display for SpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanError::Io { source, path } => {
                write!(f, "I/O error on path '{}': {}", path.display(), source)
            }
            SpanError::Zip(e) => write!(f, "Zip error: {}", e),
            SpanError::Other(e) => write!(f, "An unexpected error occurred: {}", e),
        }
    }
}

impl std::error::Error for SpanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpanError::Io { source, .. } => Some(source),
            SpanError::Zip(e) => Some(e),
            SpanError::Other(e) => Some(e.as_ref()),
        }
    }
}

impl From<zip::result::ZipError> for SpanError {
    fn from(err: zip::result::ZipError) -> Self {
        SpanError::Zip(err)
    }
}

// Generic IO error conversion that doesn't require a path
impl From<std::io::Error> for SpanError {
    fn from(err: std::io::Error) -> Self {
        SpanError::Io { source: err, path: PathBuf::new() } // Generic path
    }
}
