// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tag expression parsing and allow/deny tag filtering.
//!
//! Users pass tag queries as a single argument like `"scenery|landscape&blue"`,
//! where `&` separates groups that must all match and `|` separates
//! alternatives within a group. [`parse_tag_expr`] splits that into groups
//! for the upstream API, and [`TagFilter`] decides whether the tags attached
//! to a fetched image are acceptable under the configured filter mode.

use crate::domain::{GateError, PluginConfig, Result, TagFilterMode};
use regex::{Regex, RegexBuilder};

/// Splits a raw tag argument into AND-groups of OR-alternatives.
///
/// `&` separates groups, `|` separates alternatives inside a group. Empty
/// segments are kept, matching how the upstream API treats them.
///
/// # Examples
///
/// ```
/// use botgate::filter::parse_tag_expr;
///
/// let groups = parse_tag_expr("a|b&c");
/// assert_eq!(groups, vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]]);
/// ```
pub fn parse_tag_expr(raw: &str) -> Vec<Vec<String>> {
    raw.split('&')
        .map(|group| group.split('|').map(str::to_string).collect())
        .collect()
}

/// A compiled tag allow/deny filter.
///
/// Patterns come from [`PluginConfig::tag_filter`] and are compiled once at
/// construction; each pattern must match a WHOLE tag, case-insensitively,
/// for the tag to count as matched.
///
/// # Examples
///
/// ```
/// use botgate::domain::TagFilterMode;
/// use botgate::filter::TagFilter;
///
/// # fn main() -> botgate::domain::Result<()> {
/// let filter = TagFilter::new(
///     TagFilterMode::Blacklist,
///     &["gore".to_string(), ".*blood.*".to_string()],
/// )?;
/// assert!(filter.is_tag_allowed("scenery"));
/// assert!(!filter.is_tag_allowed("Gore"));
/// assert!(!filter.is_tag_allowed("bloodmoon"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TagFilter {
    mode: TagFilterMode,
    patterns: Vec<Regex>,
}

impl TagFilter {
    /// Compiles a filter from a mode and a list of patterns.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidFilterPattern`] for the first pattern
    /// that is not a valid regular expression.
    pub fn new(mode: TagFilterMode, patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                // Anchor so a pattern must cover the whole tag, not a substring.
                RegexBuilder::new(&format!(r"\A(?:{pattern})\z"))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| GateError::InvalidFilterPattern {
                        pattern: pattern.clone(),
                        source: Box::new(e),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { mode, patterns })
    }

    /// Compiles a filter from the plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidFilterPattern`] when a configured pattern
    /// does not compile.
    pub fn from_config(config: &PluginConfig) -> Result<Self> {
        Self::new(config.tag_filter_mode, &config.tag_filter)
    }

    /// Returns the filter mode this filter was built with.
    pub fn mode(&self) -> TagFilterMode {
        self.mode
    }

    /// Checks a single tag against the filter.
    ///
    /// - [`TagFilterMode::None`]: always allowed.
    /// - [`TagFilterMode::Whitelist`]: allowed iff some pattern matches.
    /// - [`TagFilterMode::Blacklist`]: allowed iff no pattern matches.
    pub fn is_tag_allowed(&self, tag: &str) -> bool {
        match self.mode {
            TagFilterMode::None => true,
            TagFilterMode::Whitelist => self.matches_any(tag),
            TagFilterMode::Blacklist => !self.matches_any(tag),
        }
    }

    /// Checks a whole tag set against the filter.
    ///
    /// - [`TagFilterMode::None`]: always allowed.
    /// - [`TagFilterMode::Whitelist`]: allowed iff at least one tag is
    ///   allowed. An empty tag set is rejected since nothing matched.
    /// - [`TagFilterMode::Blacklist`]: allowed iff every tag is allowed. An
    ///   empty tag set is accepted since nothing is listed.
    ///
    /// # Examples
    ///
    /// ```
    /// use botgate::domain::TagFilterMode;
    /// use botgate::filter::TagFilter;
    ///
    /// # fn main() -> botgate::domain::Result<()> {
    /// let filter = TagFilter::new(TagFilterMode::Whitelist, &["cat".to_string()])?;
    /// assert!(filter.are_tags_allowed(["cat", "dog"]));
    /// assert!(!filter.are_tags_allowed(["dog", "bird"]));
    /// # Ok(())
    /// # }
    /// ```
    pub fn are_tags_allowed<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = match self.mode {
            TagFilterMode::None => true,
            TagFilterMode::Whitelist => tags.into_iter().any(|t| self.is_tag_allowed(t.as_ref())),
            TagFilterMode::Blacklist => tags.into_iter().all(|t| self.is_tag_allowed(t.as_ref())),
        };
        if !allowed {
            tracing::debug!(mode = self.mode.name(), "tag set rejected by filter");
        }
        allowed
    }

    fn matches_any(&self, tag: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(tag))
    }
}
