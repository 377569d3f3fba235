use std::error::Error as StdError;
use std::panic::Location;

#[derive(Debug)]
pub struct Error {
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
    BadHexInput,
    Bech32(String),
    BufferTooSmall(usize),
    EndOfInput,
    General(String),
    InvalidAddr,
    InvalidNaddr,
    Json(serde_json::Error),
    TryFromSlice(std::array::TryFromSliceError),
    Utf8(std::string::FromUtf8Error),
    WrongBech32Hrp,
}

impl std::fmt::Display for InnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InnerError::BadHexInput => write!(f, "Bad hex input"),
            InnerError::Bech32(s) => write!(f, "bech32: {s}"),
            InnerError::BufferTooSmall(u) => {
                write!(f, "Output buffer too small, we require >={} bytes", u)
            }
            InnerError::EndOfInput => write!(f, "End of input"),
            InnerError::General(s) => write!(f, "{s}"),
            InnerError::InvalidAddr => write!(f, "Invalid event address"),
            InnerError::InvalidNaddr => write!(f, "Invalid naddr"),
            InnerError::Json(e) => write!(f, "JSON: {e}"),
            InnerError::TryFromSlice(e) => write!(f, "slice error: {e}"),
            InnerError::Utf8(e) => write!(f, "UTF-8: {e}"),
            InnerError::WrongBech32Hrp => write!(f, "Wrong bech32 prefix"),
        }
    }
}

impl StdError for InnerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            InnerError::Json(e) => Some(e),
            InnerError::TryFromSlice(e) => Some(e),
            InnerError::Utf8(e) => Some(e),
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

impl From<std::array::TryFromSliceError> for Error {
    #[track_caller]
    fn from(err: std::array::TryFromSliceError) -> Self {
        Error {
            inner: InnerError::TryFromSlice(err),
            location: Location::caller(),
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    #[track_caller]
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error {
            inner: InnerError::Utf8(err),
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
