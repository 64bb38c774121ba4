// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image size names and URL selection.
//!
//! The image API returns a map from size name to URL; the plugin always
//! wants the largest size actually present. `ImageSize` orders the known
//! names from largest to smallest and [`best_url`] does the lookup.

use crate::domain::errors::{GateError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Lookup table from API size name to typed size.
static SIZE_NAMES: Lazy<HashMap<&'static str, ImageSize>> = Lazy::new(|| {
    HashMap::from([
        ("original", ImageSize::Original),
        ("regular", ImageSize::Regular),
        ("small", ImageSize::Small),
        ("thumb", ImageSize::Thumb),
        ("mini", ImageSize::Mini),
    ])
});

/// An image size offered by the upstream API.
///
/// Variants are declared from largest to smallest, so the derived ordering
/// makes the minimum of a set its largest available size.
///
/// # Examples
///
/// ```
/// use botgate::domain::ImageSize;
///
/// assert!(ImageSize::Original < ImageSize::Thumb);
/// assert_eq!("regular".parse::<ImageSize>().unwrap(), ImageSize::Regular);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// The full-resolution original.
    Original,
    /// A resized regular view.
    Regular,
    /// A small preview.
    Small,
    /// A thumbnail.
    Thumb,
    /// The smallest preview offered.
    Mini,
}

impl ImageSize {
    /// Returns the lowercase size name used by the API.
    pub fn name(self) -> &'static str {
        match self {
            ImageSize::Original => "original",
            ImageSize::Regular => "regular",
            ImageSize::Small => "small",
            ImageSize::Thumb => "thumb",
            ImageSize::Mini => "mini",
        }
    }
}

impl FromStr for ImageSize {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        SIZE_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| GateError::UnknownImageSize(s.to_string()))
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the URL of the largest size present in an API size map.
///
/// Size names that are not recognized are ignored. Returns `None` when the
/// map is empty or contains only unrecognized names.
///
/// # Examples
///
/// ```
/// use botgate::domain::best_url;
/// use std::collections::HashMap;
///
/// let urls = HashMap::from([
///     ("small".to_string(), "https://img.example/s.png".to_string()),
///     ("regular".to_string(), "https://img.example/r.png".to_string()),
/// ]);
/// assert_eq!(best_url(&urls), Some("https://img.example/r.png"));
/// ```
pub fn best_url(urls: &HashMap<String, String>) -> Option<&str> {
    urls.iter()
        .filter_map(|(name, url)| name.parse::<ImageSize>().ok().map(|size| (size, url)))
        .min_by_key(|(size, _)| *size)
        .map(|(_, url)| url.as_str())
}
