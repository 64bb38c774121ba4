// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the gating crate.
//!
//! This module defines the error types that can occur when validating user
//! input or building filters. All errors use `thiserror` and carry the
//! offending value so callers can echo it back in a command reply.

use thiserror::Error;

/// The main error type for gating and validation operations.
///
/// Every variant carries the rejected input so the command layer can report
/// it to the user verbatim. The enum is `#[non_exhaustive]` to allow new
/// variants without breaking callers.
///
/// # Examples
///
/// ```
/// use botgate::domain::{GateError, Setting};
///
/// let err = Setting::Recall.convert_value("300").unwrap_err();
/// assert!(matches!(err, GateError::SettingOutOfRange { .. }));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GateError {
    /// A setting value did not parse as a decimal integer.
    #[error("value '{value}' for setting '{setting}' is not a number")]
    SettingNotANumber {
        /// The setting being assigned
        setting: &'static str,
        /// The raw input value
        value: String,
    },

    /// A setting value parsed but fell outside the allowed range.
    #[error("value '{value}' is out of range for setting '{setting}'")]
    SettingOutOfRange {
        /// The setting being assigned
        setting: &'static str,
        /// The raw input value
        value: String,
    },

    /// The input did not name a known setting.
    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    /// The input did not name a known proxy type.
    #[error("unknown proxy type '{0}'")]
    UnknownProxyType(String),

    /// The input did not name a known access mode.
    #[error("unknown access mode '{0}'")]
    UnknownAccessMode(String),

    /// The input did not name a known tag filter mode.
    #[error("unknown tag filter mode '{0}'")]
    UnknownTagFilterMode(String),

    /// The input did not name a known image size.
    #[error("unknown image size '{0}'")]
    UnknownImageSize(String),

    /// A configured tag filter pattern is not a valid regular expression.
    #[error("malformed tag filter pattern '{pattern}': {source}")]
    InvalidFilterPattern {
        /// The pattern that failed to compile
        pattern: String,
        /// The underlying regex error
        #[source]
        source: Box<regex::Error>,
    },
}

/// A specialized Result type for gating operations.
pub type Result<T> = std::result::Result<T, GateError>;
