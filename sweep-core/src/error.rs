use std::error::Error as StdError;
use std::panic::Location;
use sweep_types::Kind;

/// An error, including the source code location where it was created
#[derive(Debug)]
pub struct Error {
    /// The error itself
    pub inner: InnerError,
    location: &'static Location<'static>,
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.inner, self.location)
    }
}

/// Errors that can occur in the crate
#[derive(Debug)]
pub enum InnerError {
    /// The event's kind is not the one this operation handles
    BadEventKind {
        /// The kind the operation handles
        expected: Kind,
        /// The kind the event carried
        found: Kind,
    },

    /// A general error
    General(String),

    /// Content did not decode as the expected JSON shape
    Json(serde_json::Error),

    /// An error from the types crate
    Types(sweep_types::Error),
}

impl std::fmt::Display for InnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InnerError::BadEventKind { expected, found } => {
                write!(f, "Wrong event kind: expected {expected}, found {found}")
            }
            InnerError::General(s) => write!(f, "{s}"),
            InnerError::Json(e) => write!(f, "JSON: {e}"),
            InnerError::Types(e) => write!(f, "types: {e}"),
        }
    }
}

impl StdError for InnerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            InnerError::Json(e) => Some(e),
            InnerError::Types(e) => Some(e),
            _ => None,
        }
    }
}

// Note: we impl Into because our typical pattern is InnerError::Variant.into()
//       when we tried implementing From, the location was deep in rust code's
//       blanket into implementation, which wasn't the line number we wanted.
//
//       As for converting other error types, the try! macro uses From so it
//       is correct.
#[allow(clippy::from_over_into)]
impl Into<Error> for InnerError {
    #[track_caller]
    fn into(self) -> Error {
        Error {
            inner: self,
            location: Location::caller(),
        }
    }
}

impl From<serde_json::Error> for Error {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Error {
            inner: InnerError::Json(err),
            location: Location::caller(),
        }
    }
}

impl From<sweep_types::Error> for Error {
    #[track_caller]
    fn from(err: sweep_types::Error) -> Self {
        Error {
            inner: InnerError::Types(err),
            location: Location::caller(),
        }
    }
}
