// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in this crate return `error::Result<T>`.  No panics
// in production paths; native failure sentinels (null pointers, nonzero
// return codes) are translated into the variants below at the call site.

use std::ffi::NulError;
use std::path::PathBuf;

/// Every error that this crate can produce.
#[derive(Debug)]
pub enum Error {
    /// A native shared library could not be opened, or an entry point was
    /// missing from it.
    Library {
        /// The library (or symbol) that failed to resolve, for display.
        library: String,
        /// The underlying loader error.
        source: libloading::Error,
    },

    /// A native call returned its failure sentinel.
    Native {
        /// The name of the failing entry point, for display purposes.
        function: &'static str,
        /// The message reported by `SDL_GetError` at the time of failure.
        message: String,
    },

    /// A path was rejected before reaching the native library because no
    /// file exists there.
    MissingFile(PathBuf),

    /// A caller-supplied native handle was null.
    NullPointer {
        /// The name of the offending parameter.
        param: &'static str,
    },

    /// An argument failed validation (range or emptiness checks).
    InvalidArgument {
        /// The name of the offending parameter.
        param: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A string contained an interior NUL byte and could not be marshalled
    /// to a C string.
    Nul(NulError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Library { library, source } => {
                write!(f, "failed to load {library}: {source}")
            }
            Self::Native { function, message } => {
                if message.is_empty() {
                    write!(f, "{function} failed")
                } else {
                    write!(f, "{function} failed: {message}")
                }
            }
            Self::MissingFile(path) => write!(f, "no such file: {}", path.display()),
            Self::NullPointer { param } => write!(f, "`{param}` must not be null"),
            Self::InvalidArgument { param, reason } => {
                write!(f, "invalid `{param}`: {reason}")
            }
            Self::Nul(e) => write!(f, "string contains an interior NUL byte: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library { source, .. } => Some(source),
            Self::Nul(e) => Some(e),
            _ => None,
        }
    }
}

// Convert a CString construction failure directly into an Error so that `?`
// can be used on marshalling helpers throughout the image module.
impl From<NulError> for Error {
    fn from(e: NulError) -> Self {
        Self::Nul(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn native_display_includes_function_and_message() {
        let e = Error::Native {
            function: "IMG_Load",
            message: "unsupported image format".to_owned(),
        };
        assert_eq!(e.to_string(), "IMG_Load failed: unsupported image format");
    }

    #[test]
    fn native_display_without_message() {
        let e = Error::Native {
            function: "IMG_SavePNG",
            message: String::new(),
        };
        assert_eq!(e.to_string(), "IMG_SavePNG failed");
    }

    #[test]
    fn missing_file_display() {
        let e = Error::MissingFile(PathBuf::from("sprites/hero.png"));
        assert_eq!(e.to_string(), "no such file: sprites/hero.png");
    }

    #[test]
    fn null_pointer_display() {
        let e = Error::NullPointer { param: "renderer" };
        assert_eq!(e.to_string(), "`renderer` must not be null");
    }

    #[test]
    fn invalid_argument_display() {
        let e = Error::InvalidArgument {
            param: "quality",
            reason: "must be between 0 and 100 (got 250)".to_owned(),
        };
        assert_eq!(
            e.to_string(),
            "invalid `quality`: must be between 0 and 100 (got 250)"
        );
    }

    #[test]
    fn nul_error_converts_via_from() {
        let nul = CString::new("ab\0cd").unwrap_err();
        let e = Error::from(nul);
        assert!(matches!(e, Error::Nul(_)));
        // The source chain must expose the underlying NulError.
        assert!(std::error::Error::source(&e).is_some());
    }
}
