// SPDX-License-Identifier: MIT OR Apache-2.0

//! Proxy type for the host's image fetcher.
//!
//! The network client itself lives outside this crate; commands only need to
//! parse the user-supplied proxy type string into something typed.

use crate::domain::errors::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The proxy type used when fetching images.
///
/// Parsed from the upper-case names users pass to the proxy command.
///
/// # Examples
///
/// ```
/// use botgate::domain::ProxyType;
///
/// assert_eq!("SOCKS".parse::<ProxyType>().unwrap(), ProxyType::Socks);
/// assert!("socks".parse::<ProxyType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProxyType {
    /// No proxy; connect directly.
    #[default]
    Direct,
    /// An HTTP proxy.
    Http,
    /// A SOCKS proxy.
    Socks,
}

impl ProxyType {
    /// Returns the upper-case name used in commands and configuration.
    pub fn name(self) -> &'static str {
        match self {
            ProxyType::Direct => "DIRECT",
            ProxyType::Http => "HTTP",
            ProxyType::Socks => "SOCKS",
        }
    }
}

impl FromStr for ProxyType {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DIRECT" => Ok(ProxyType::Direct),
            "HTTP" => Ok(ProxyType::Http),
            "SOCKS" => Ok(ProxyType::Socks),
            _ => Err(GateError::UnknownProxyType(s.to_string())),
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
