// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subject gating and trust predicates.
//!
//! These are the checks the command layer runs before doing anything on a
//! user's behalf: is the caller the owner, is the caller trusted, and is the
//! chat (direct or group) allowed to use the bot at all under the configured
//! access mode.
//!
//! All predicates treat an absent user as the console, which is always
//! allowed.

use crate::domain::{AccessMode, PluginConfig, PluginData, Subject, UserId};

/// Checks whether `user` is the bot owner.
///
/// An absent user means the command came from the console, which counts as
/// the owner.
///
/// # Examples
///
/// ```
/// use botgate::access::is_master;
/// use botgate::domain::{PluginConfig, UserId};
///
/// let mut config = PluginConfig::default();
/// config.master = UserId::new(12345);
///
/// assert!(is_master(&config, Some(UserId::new(12345))));
/// assert!(!is_master(&config, Some(UserId::new(54321))));
/// assert!(is_master(&config, None));
/// ```
pub fn is_master(config: &PluginConfig, user: Option<UserId>) -> bool {
    user.map_or(true, |u| u == config.master)
}

/// Checks whether `user` is in the trusted set.
///
/// An absent user means the console, which is always trusted. The owner is
/// not implicitly trusted here; callers combine this with [`is_master`].
///
/// # Examples
///
/// ```
/// use botgate::access::is_trusted;
/// use botgate::domain::{PluginData, UserId};
///
/// let mut data = PluginData::default();
/// data.trust(UserId::new(1));
///
/// assert!(is_trusted(&data, Some(UserId::new(1))));
/// assert!(!is_trusted(&data, Some(UserId::new(2))));
/// assert!(is_trusted(&data, None));
/// ```
pub fn is_trusted(data: &PluginData, user: Option<UserId>) -> bool {
    user.map_or(true, |u| data.trusted_users.contains(&u))
}

/// Checks whether a subject may use the bot under the configured access mode.
///
/// - [`AccessMode::All`]: everything is permitted.
/// - [`AccessMode::Whitelist`]: a direct user must be in `data.user_set`; a
///   group subject needs the group in `data.group_set` AND the sender in
///   `data.user_set`. A group message with no known sender is denied.
/// - [`AccessMode::Blacklist`]: a direct user must NOT be in
///   `data.user_set`; a group subject needs the group NOT in
///   `data.group_set` AND the sender NOT in `data.user_set`. An unknown
///   sender counts as unlisted.
///
/// The console is permitted in every mode.
///
/// # Examples
///
/// ```
/// use botgate::access::is_permitted;
/// use botgate::domain::{AccessMode, PluginConfig, PluginData, Subject, UserId};
///
/// let mut config = PluginConfig::default();
/// config.mode = AccessMode::Blacklist;
///
/// let mut data = PluginData::default();
/// data.user_set.insert(UserId::new(666));
///
/// assert!(!is_permitted(&config, &data, &Subject::User(UserId::new(666))));
/// assert!(is_permitted(&config, &data, &Subject::User(UserId::new(1))));
/// ```
pub fn is_permitted(config: &PluginConfig, data: &PluginData, subject: &Subject) -> bool {
    let permitted = match config.mode {
        AccessMode::All => true,
        AccessMode::Whitelist => match *subject {
            Subject::Console => true,
            Subject::User(id) => data.user_set.contains(&id),
            Subject::Group { id, sender } => {
                data.group_set.contains(&id)
                    && sender.is_some_and(|u| data.user_set.contains(&u))
            }
        },
        AccessMode::Blacklist => match *subject {
            Subject::Console => true,
            Subject::User(id) => !data.user_set.contains(&id),
            Subject::Group { id, sender } => {
                !data.group_set.contains(&id)
                    && !sender.is_some_and(|u| data.user_set.contains(&u))
            }
        },
    };
    if !permitted {
        tracing::debug!(mode = config.mode.name(), ?subject, "subject denied");
    }
    permitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GroupId;

    fn config_with_mode(mode: AccessMode) -> PluginConfig {
        PluginConfig {
            mode,
            ..PluginConfig::default()
        }
    }

    fn listed_data() -> PluginData {
        let mut data = PluginData::default();
        data.user_set.insert(UserId::new(1));
        data.group_set.insert(GroupId::new(10));
        data
    }

    #[test]
    fn test_is_master_matches_configured_owner() {
        let mut config = PluginConfig::default();
        config.master = UserId::new(7);
        assert!(is_master(&config, Some(UserId::new(7))));
        assert!(!is_master(&config, Some(UserId::new(8))));
    }

    #[test]
    fn test_is_master_console() {
        let config = PluginConfig::default();
        assert!(is_master(&config, None));
    }

    #[test]
    fn test_is_trusted() {
        let mut data = PluginData::default();
        data.trust(UserId::new(5));
        assert!(is_trusted(&data, Some(UserId::new(5))));
        assert!(!is_trusted(&data, Some(UserId::new(6))));
        assert!(is_trusted(&data, None));
    }

    #[test]
    fn test_mode_all_permits_everyone() {
        let config = config_with_mode(AccessMode::All);
        let data = listed_data();
        assert!(is_permitted(&config, &data, &Subject::Console));
        assert!(is_permitted(&config, &data, &Subject::User(UserId::new(99))));
        assert!(is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(99),
                sender: None
            }
        ));
    }

    #[test]
    fn test_whitelist_direct_user() {
        let config = config_with_mode(AccessMode::Whitelist);
        let data = listed_data();
        assert!(is_permitted(&config, &data, &Subject::User(UserId::new(1))));
        assert!(!is_permitted(&config, &data, &Subject::User(UserId::new(2))));
    }

    #[test]
    fn test_whitelist_group_needs_group_and_sender() {
        let config = config_with_mode(AccessMode::Whitelist);
        let data = listed_data();

        // listed group, listed sender
        assert!(is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(10),
                sender: Some(UserId::new(1))
            }
        ));
        // listed group, unlisted sender
        assert!(!is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(10),
                sender: Some(UserId::new(2))
            }
        ));
        // unlisted group, listed sender
        assert!(!is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(11),
                sender: Some(UserId::new(1))
            }
        ));
    }

    #[test]
    fn test_whitelist_group_unknown_sender_denied() {
        let config = config_with_mode(AccessMode::Whitelist);
        let data = listed_data();
        assert!(!is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(10),
                sender: None
            }
        ));
    }

    #[test]
    fn test_whitelist_console_permitted() {
        let config = config_with_mode(AccessMode::Whitelist);
        let data = PluginData::default();
        assert!(is_permitted(&config, &data, &Subject::Console));
    }

    #[test]
    fn test_blacklist_direct_user() {
        let config = config_with_mode(AccessMode::Blacklist);
        let data = listed_data();
        assert!(!is_permitted(&config, &data, &Subject::User(UserId::new(1))));
        assert!(is_permitted(&config, &data, &Subject::User(UserId::new(2))));
    }

    #[test]
    fn test_blacklist_group_denied_by_group_or_sender() {
        let config = config_with_mode(AccessMode::Blacklist);
        let data = listed_data();

        // listed group
        assert!(!is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(10),
                sender: Some(UserId::new(2))
            }
        ));
        // unlisted group, listed sender
        assert!(!is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(11),
                sender: Some(UserId::new(1))
            }
        ));
        // unlisted group, unlisted sender
        assert!(is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(11),
                sender: Some(UserId::new(2))
            }
        ));
    }

    #[test]
    fn test_blacklist_group_unknown_sender_counts_as_unlisted() {
        let config = config_with_mode(AccessMode::Blacklist);
        let data = listed_data();
        assert!(is_permitted(
            &config,
            &data,
            &Subject::Group {
                id: GroupId::new(11),
                sender: None
            }
        ));
    }

    #[test]
    fn test_blacklist_console_permitted() {
        let config = config_with_mode(AccessMode::Blacklist);
        let data = listed_data();
        assert!(is_permitted(&config, &data, &Subject::Console));
    }
}
