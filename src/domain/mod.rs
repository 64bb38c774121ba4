// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types for plugin gating and filtering.
//!
//! This module contains the plain data types the host bot hands to this
//! crate: identities, configuration and data holders, and the validated
//! conversions for setting values, proxy types, and image sizes.

pub mod config;
pub mod errors;
pub mod identity;
pub mod image;
pub mod proxy;
pub mod settings;

pub use config::{AccessMode, PluginConfig, PluginData, TagFilterMode};
pub use errors::{GateError, Result};
pub use identity::{GroupId, Role, Subject, UserId};
pub use image::{best_url, ImageSize};
pub use proxy::ProxyType;
pub use settings::Setting;
