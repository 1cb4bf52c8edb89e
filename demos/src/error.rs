// SPDX-License-Identifier: Apache-2.0

use vestli_json::DecodeError;

/// Errors from loading the board configuration.
#[derive(Debug)]
pub enum Error {
    /// The file could not be read.
    Io(std::io::Error),
    /// The text is not JSON at all.
    Decode(DecodeError),
    /// The top-level value is not an object.
    NotAnObject,
    /// Entry `n` of `Stations` is not an object.
    StationNotAnObject(usize),
    /// Entry `n` of `Stations` has no `ID`.
    MissingStationId(usize),
    /// No `FontPath` was given.
    MissingFontPath,
    /// `FontPath` is not valid UTF-8.
    FontPathNotUtf8,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{e}"),
            Error::Decode(e) => write!(f, "json decode failed: {e}"),
            Error::NotAnObject => write!(f, "configuration is not a JSON object"),
            Error::StationNotAnObject(n) => write!(f, "station {n} is not a JSON object"),
            Error::MissingStationId(n) => write!(f, "missing ID for station {n}"),
            Error::MissingFontPath => write!(f, "missing FontPath"),
            Error::FontPathNotUtf8 => write!(f, "FontPath is not valid UTF-8"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}
