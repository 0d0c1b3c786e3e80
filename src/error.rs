// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Encode(String),
    Io(String),
    Config(String),
}

/// Reasons a candidate URL fails syntactic validation.
/// These never become dialogs; the status line renders them inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string does not parse as an absolute URL at all.
    Malformed(String),

    /// The string parses but carries no host/authority component
    /// (e.g. `mailto:` or `data:` URLs).
    MissingHost,
}

impl ValidationError {
    /// Returns the i18n message key for the inline status text.
    ///
    /// All reasons share one user-facing message; the distinction only
    /// matters for diagnostics and tests.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::Malformed(_) | ValidationError::MissingHost => "status-url-invalid",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Malformed(details) => write!(f, "not an absolute URL: {}", details),
            ValidationError::MissingHost => write!(f, "URL has no host component"),
        }
    }
}

impl Error {
    /// Returns the i18n message key for the user-facing description
    /// shown in the modal dialog and the status line.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Encode(_) => "error-encode-failed",
            Error::Io(_) => "error-save-failed",
            Error::Config(_) => "error-config",
        }
    }

    /// Raw detail string carried by the error, for the dialog body.
    pub fn details(&self) -> &str {
        match self {
            Error::Encode(details) | Error::Io(details) | Error::Config(details) => details,
        }
    }

    /// Returns Fluent arguments for the message behind [`Self::i18n_key`].
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        vec![("details", self.details().to_string())]
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encode(e) => write!(f, "Encoding Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(err: qrcode::types::QrError) -> Self {
        Error::Encode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
