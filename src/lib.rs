// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access gating and content filtering helpers for chat-bot plugins.
//!
//! This crate collects the small, mostly pure predicates a chat-bot image
//! plugin needs before acting on a command: who may talk to the bot, which
//! tags are acceptable, whether a setting value is in range, and which image
//! URL to pick from a size map. The bot framework, the network client, and
//! the configuration persistence layer all live outside this crate; callers
//! hand in plain [`PluginConfig`]/[`PluginData`] values and identity types
//! and get back booleans or validated values.
//!
//! # Layers
//!
//! - **Domain**: identity types, configuration/data holders, validated
//!   setting and proxy-type conversions, image size selection
//! - **Access**: whitelist/blacklist subject gating and owner/trust checks
//! - **Filter**: tag expression parsing and regex-based tag allow/deny lists
//!
//! # Quick Start
//!
//! ```rust
//! use botgate::prelude::*;
//!
//! # fn main() -> botgate::domain::Result<()> {
//! let mut config = PluginConfig::default();
//! config.mode = AccessMode::Whitelist;
//!
//! let mut data = PluginData::default();
//! data.user_set.insert(UserId::new(12345));
//!
//! assert!(is_permitted(&config, &data, &Subject::User(UserId::new(12345))));
//! assert!(!is_permitted(&config, &data, &Subject::User(UserId::new(54321))));
//! # Ok(())
//! # }
//! ```
//!
//! [`PluginConfig`]: crate::domain::PluginConfig
//! [`PluginData`]: crate::domain::PluginData

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod access;
pub mod domain;
pub mod filter;

/// Commonly used types and functions.
///
/// This module re-exports the most commonly used items for convenient access.
pub mod prelude {
    pub use crate::access::{is_master, is_permitted, is_trusted};
    pub use crate::domain::{
        AccessMode, GateError, GroupId, ImageSize, PluginConfig, PluginData, ProxyType, Result,
        Role, Setting, Subject, TagFilterMode, UserId,
    };
    pub use crate::filter::{parse_tag_expr, TagFilter};
}
