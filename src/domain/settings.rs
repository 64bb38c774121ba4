// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric plugin settings and their validated conversion.
//!
//! The command layer receives setting assignments as two strings (a setting
//! name and a value). `Setting` identifies the property being assigned and
//! `convert_value` turns the raw string into an integer, rejecting values
//! outside the setting's range.

use crate::domain::errors::{GateError, Result};
use std::fmt;
use std::str::FromStr;

/// Maximum recall delay in seconds, exclusive.
///
/// The host framework refuses to recall messages older than two minutes, so
/// larger values would silently never fire.
const RECALL_LIMIT_SECS: i32 = 120;

/// A numeric plugin setting that can be assigned from a command.
///
/// # Examples
///
/// ```
/// use botgate::domain::Setting;
///
/// let setting: Setting = "recall".parse().unwrap();
/// assert_eq!(setting.convert_value("60").unwrap(), 60);
/// assert!(setting.convert_value("120").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Setting {
    /// Age-restricted content level: 0 (off), 1 (on), or 2 (mixed).
    R18,
    /// Seconds before a sent image is recalled; 0 disables recall.
    Recall,
    /// Cooldown between commands in seconds; 0 disables the cooldown.
    Cooldown,
}

impl Setting {
    /// Returns the lowercase name used in commands.
    pub fn name(self) -> &'static str {
        match self {
            Setting::R18 => "r18",
            Setting::Recall => "recall",
            Setting::Cooldown => "cooldown",
        }
    }

    /// Parses and range-checks a raw value for this setting.
    ///
    /// The allowed ranges are:
    ///
    /// - `r18`: 0, 1, or 2
    /// - `recall`: 0 to 119 seconds
    /// - `cooldown`: any non-negative number of seconds
    ///
    /// # Errors
    ///
    /// Returns [`GateError::SettingNotANumber`] when `raw` is not a decimal
    /// integer and [`GateError::SettingOutOfRange`] when it parses but falls
    /// outside the setting's range. Both carry the raw input.
    ///
    /// # Examples
    ///
    /// ```
    /// use botgate::domain::Setting;
    ///
    /// assert_eq!(Setting::R18.convert_value("2").unwrap(), 2);
    /// assert!(Setting::R18.convert_value("3").is_err());
    /// assert!(Setting::Cooldown.convert_value("-1").is_err());
    /// assert!(Setting::Cooldown.convert_value("1e3").is_err());
    /// ```
    pub fn convert_value(self, raw: &str) -> Result<i32> {
        let value: i32 = raw.parse().map_err(|_| GateError::SettingNotANumber {
            setting: self.name(),
            value: raw.to_string(),
        })?;
        let in_range = match self {
            Setting::R18 => (0..=2).contains(&value),
            Setting::Recall => (0..RECALL_LIMIT_SECS).contains(&value),
            Setting::Cooldown => value >= 0,
        };
        if in_range {
            Ok(value)
        } else {
            Err(GateError::SettingOutOfRange {
                setting: self.name(),
                value: raw.to_string(),
            })
        }
    }
}

impl FromStr for Setting {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r18" => Ok(Setting::R18),
            "recall" => Ok(Setting::Recall),
            "cooldown" => Ok(Setting::Cooldown),
            _ => Err(GateError::UnknownSetting(s.to_string())),
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_from_str() {
        assert_eq!("r18".parse::<Setting>().unwrap(), Setting::R18);
        assert_eq!("recall".parse::<Setting>().unwrap(), Setting::Recall);
        assert_eq!("cooldown".parse::<Setting>().unwrap(), Setting::Cooldown);
    }

    #[test]
    fn test_setting_from_str_rejects_unknown() {
        let err = "timeout".parse::<Setting>().unwrap_err();
        assert!(matches!(err, GateError::UnknownSetting(v) if v == "timeout"));
    }

    #[test]
    fn test_r18_accepts_levels() {
        for value in 0..=2 {
            assert_eq!(
                Setting::R18.convert_value(&value.to_string()).unwrap(),
                value
            );
        }
    }

    #[test]
    fn test_r18_rejects_other_values() {
        assert!(Setting::R18.convert_value("3").is_err());
        assert!(Setting::R18.convert_value("-1").is_err());
        assert!(Setting::R18.convert_value("100").is_err());
    }

    #[test]
    fn test_recall_range() {
        assert_eq!(Setting::Recall.convert_value("0").unwrap(), 0);
        assert_eq!(Setting::Recall.convert_value("119").unwrap(), 119);
        assert!(Setting::Recall.convert_value("120").is_err());
        assert!(Setting::Recall.convert_value("-1").is_err());
    }

    #[test]
    fn test_cooldown_rejects_negative_only() {
        assert_eq!(Setting::Cooldown.convert_value("0").unwrap(), 0);
        assert_eq!(Setting::Cooldown.convert_value("86400").unwrap(), 86400);
        assert!(Setting::Cooldown.convert_value("-1").is_err());
    }

    #[test]
    fn test_convert_value_rejects_non_numeric() {
        for raw in ["", "abc", "1.5", "0x10", " 1"] {
            let err = Setting::Cooldown.convert_value(raw).unwrap_err();
            assert!(
                matches!(&err, GateError::SettingNotANumber { value, .. } if value == raw),
                "expected parse failure for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_error_carries_setting_name() {
        let err = Setting::Recall.convert_value("500").unwrap_err();
        assert!(matches!(
            err,
            GateError::SettingOutOfRange {
                setting: "recall",
                ..
            }
        ));
    }

    #[test]
    fn test_setting_display() {
        assert_eq!(Setting::R18.to_string(), "r18");
        assert_eq!(Setting::Cooldown.to_string(), "cooldown");
    }
}
