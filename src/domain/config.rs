// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin configuration and data holders.
//!
//! `PluginConfig` and `PluginData` are owned and persisted by the host
//! plugin; this crate only reads them. Both derive `serde` traits so the
//! host can store them in whatever format it uses, and both have permissive
//! defaults (everything allowed, nothing listed).

use crate::domain::errors::{GateError, Result};
use crate::domain::identity::{GroupId, UserId};
use crate::domain::proxy::ProxyType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// How subjects are gated before commands run.
///
/// # Examples
///
/// ```
/// use botgate::domain::AccessMode;
///
/// let mode: AccessMode = "blacklist".parse().unwrap();
/// assert_eq!(mode, AccessMode::Blacklist);
/// assert!("greylist".parse::<AccessMode>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Every subject is permitted.
    #[default]
    All,
    /// Only listed users and groups are permitted.
    Whitelist,
    /// Listed users and groups are denied.
    Blacklist,
}

impl AccessMode {
    /// Returns the lowercase name used in configuration and commands.
    pub fn name(self) -> &'static str {
        match self {
            AccessMode::All => "all",
            AccessMode::Whitelist => "whitelist",
            AccessMode::Blacklist => "blacklist",
        }
    }
}

impl FromStr for AccessMode {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(AccessMode::All),
            "whitelist" => Ok(AccessMode::Whitelist),
            "blacklist" => Ok(AccessMode::Blacklist),
            _ => Err(GateError::UnknownAccessMode(s.to_string())),
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How fetched tags are filtered before an image is sent.
///
/// # Examples
///
/// ```
/// use botgate::domain::TagFilterMode;
///
/// let mode: TagFilterMode = "whitelist".parse().unwrap();
/// assert_eq!(mode, TagFilterMode::Whitelist);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagFilterMode {
    /// No filtering; every tag is allowed.
    #[default]
    None,
    /// A tag set is allowed only if some tag matches a filter pattern.
    Whitelist,
    /// A tag set is allowed only if no tag matches a filter pattern.
    Blacklist,
}

impl TagFilterMode {
    /// Returns the lowercase name used in configuration and commands.
    pub fn name(self) -> &'static str {
        match self {
            TagFilterMode::None => "none",
            TagFilterMode::Whitelist => "whitelist",
            TagFilterMode::Blacklist => "blacklist",
        }
    }
}

impl FromStr for TagFilterMode {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(TagFilterMode::None),
            "whitelist" => Ok(TagFilterMode::Whitelist),
            "blacklist" => Ok(TagFilterMode::Blacklist),
            _ => Err(GateError::UnknownTagFilterMode(s.to_string())),
        }
    }
}

impl fmt::Display for TagFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Plugin configuration owned and persisted by the host.
///
/// # Examples
///
/// ```
/// use botgate::domain::{AccessMode, PluginConfig, TagFilterMode};
///
/// let config = PluginConfig::default();
/// assert_eq!(config.mode, AccessMode::All);
/// assert_eq!(config.tag_filter_mode, TagFilterMode::None);
/// assert!(config.tag_filter.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// The bot owner's account.
    pub master: UserId,
    /// Subject gating mode.
    pub mode: AccessMode,
    /// Tag filtering mode.
    pub tag_filter_mode: TagFilterMode,
    /// Tag filter patterns; regular expressions matched against whole tags.
    pub tag_filter: Vec<String>,
    /// Proxy type used by the host's image fetcher.
    pub proxy_type: ProxyType,
    /// Proxy host used when `proxy_type` is not `Direct`.
    pub proxy_host: String,
    /// Proxy port used when `proxy_type` is not `Direct`.
    pub proxy_port: u16,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            master: UserId::new(0),
            mode: AccessMode::All,
            tag_filter_mode: TagFilterMode::None,
            tag_filter: Vec::new(),
            proxy_type: ProxyType::Direct,
            proxy_host: "127.0.0.1".to_string(),
            proxy_port: 1080,
        }
    }
}

/// Mutable plugin data owned and persisted by the host.
///
/// Holds the identifier sets the gating predicates consult. Which semantics
/// `user_set` and `group_set` carry (allow or deny) depends on
/// [`PluginConfig::mode`].
///
/// # Examples
///
/// ```
/// use botgate::domain::{PluginData, UserId};
///
/// let mut data = PluginData::default();
/// assert!(data.trust(UserId::new(1)));
/// assert!(!data.trust(UserId::new(1)));
/// assert!(data.distrust(UserId::new(1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginData {
    /// Users allowed to use management commands besides the master.
    pub trusted_users: HashSet<UserId>,
    /// Listed users; allow or deny list depending on the access mode.
    pub user_set: HashSet<UserId>,
    /// Listed groups; allow or deny list depending on the access mode.
    pub group_set: HashSet<GroupId>,
}

impl PluginData {
    /// Adds a user to the trusted set. Returns `false` when already present.
    pub fn trust(&mut self, user: UserId) -> bool {
        self.trusted_users.insert(user)
    }

    /// Removes a user from the trusted set. Returns `false` when absent.
    pub fn distrust(&mut self, user: UserId) -> bool {
        self.trusted_users.remove(&user)
    }
}
