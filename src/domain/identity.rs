// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity types for users, groups, and command subjects.
//!
//! The host bot framework owns the real account objects; this module defines
//! the thin identity values it hands across the boundary. `UserId` and
//! `GroupId` are newtypes over the numeric account identifier so the two can
//! never be confused, and `Subject` captures where a command came from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric user account identifier.
///
/// # Examples
///
/// ```
/// use botgate::domain::UserId;
///
/// let id = UserId::new(12345);
/// assert_eq!(id.value(), 12345);
/// assert_eq!(id.to_string(), "12345");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a new `UserId` from a raw account number.
    pub fn new(id: u64) -> Self {
        UserId(id)
    }

    /// Returns the raw account number.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numeric group identifier.
///
/// # Examples
///
/// ```
/// use botgate::domain::GroupId;
///
/// let id = GroupId::new(67890);
/// assert_eq!(id.value(), 67890);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(u64);

impl GroupId {
    /// Creates a new `GroupId` from a raw group number.
    pub fn new(id: u64) -> Self {
        GroupId(id)
    }

    /// Returns the raw group number.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        GroupId(id)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member's role within a group.
///
/// Ordering follows privilege: `Member < Administrator < Owner`.
///
/// # Examples
///
/// ```
/// use botgate::domain::Role;
///
/// assert!(!Role::Member.can_manage());
/// assert!(Role::Administrator.can_manage());
/// assert!(Role::Owner.can_manage());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// An ordinary group member with no elevated rights.
    Member,
    /// A group administrator.
    Administrator,
    /// The group owner.
    Owner,
}

impl Role {
    /// Returns `true` when this role may use management commands, i.e. the
    /// member is a group administrator or the group owner.
    pub fn can_manage(self) -> bool {
        self != Role::Member
    }
}

/// The origin of a command.
///
/// The gating predicates treat the three origins differently: the console is
/// always trusted, direct chats are checked against the user lists, and group
/// messages are checked against both the group and the sending user.
///
/// # Examples
///
/// ```
/// use botgate::domain::{GroupId, Subject, UserId};
///
/// let direct = Subject::User(UserId::new(1));
/// let group = Subject::Group {
///     id: GroupId::new(2),
///     sender: Some(UserId::new(1)),
/// };
/// assert_ne!(direct, Subject::Console);
/// assert_ne!(direct, group);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    /// The bot console; not tied to any account.
    Console,
    /// A direct (private) chat with the given user.
    User(UserId),
    /// A group chat.
    Group {
        /// The group the message arrived in.
        id: GroupId,
        /// The sending member, when known.
        sender: Option<UserId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_user_id_new_and_value() {
        let id = UserId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_user_id_from_u64() {
        let id = UserId::from(42u64);
        assert_eq!(id, UserId::new(42));
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(12345).to_string(), "12345");
    }

    #[test]
    fn test_user_id_in_hash_set() {
        let mut set = HashSet::new();
        set.insert(UserId::new(1));
        assert!(set.contains(&UserId::new(1)));
        assert!(!set.contains(&UserId::new(2)));
    }

    #[test]
    fn test_group_id_display() {
        assert_eq!(GroupId::new(67890).to_string(), "67890");
    }

    #[test]
    fn test_role_ordering() {
        assert!(Role::Member < Role::Administrator);
        assert!(Role::Administrator < Role::Owner);
    }

    #[test]
    fn test_role_can_manage() {
        assert!(!Role::Member.can_manage());
        assert!(Role::Administrator.can_manage());
        assert!(Role::Owner.can_manage());
    }

    #[test]
    fn test_subject_equality() {
        let a = Subject::Group {
            id: GroupId::new(2),
            sender: Some(UserId::new(1)),
        };
        let b = Subject::Group {
            id: GroupId::new(2),
            sender: Some(UserId::new(1)),
        };
        let c = Subject::Group {
            id: GroupId::new(2),
            sender: None,
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_user_id_serde_transparent() {
        let json = serde_json::to_string(&UserId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserId::new(42));
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Administrator).unwrap();
        assert_eq!(json, "\"administrator\"");
    }
}
