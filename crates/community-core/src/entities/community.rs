//! Community entity - a named group with a member roster

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Community entity
///
/// The member roster is a set: a user is either on it or not, and repeated
/// joins cannot produce duplicates. `created_by` records who created the
/// community and never changes, even if that user later leaves the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub created_by: Snowflake,
    pub members: HashSet<Snowflake>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    /// Create a new Community with the creator seeded as its first member
    pub fn new(
        id: Snowflake,
        name: String,
        description: String,
        created_by: Snowflake,
    ) -> Self {
        let now = Utc::now();
        let mut members = HashSet::new();
        members.insert(created_by);
        Self {
            id,
            name,
            description,
            created_by,
            members,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user created this community
    #[inline]
    pub fn is_creator(&self, user_id: Snowflake) -> bool {
        self.created_by == user_id
    }

    /// Check if a user is currently on the roster
    #[inline]
    pub fn is_member(&self, user_id: Snowflake) -> bool {
        self.members.contains(&user_id)
    }

    /// Add a user to the roster
    ///
    /// Returns `false` if the user was already a member (the roster is
    /// unchanged in that case).
    pub fn add_member(&mut self, user_id: Snowflake) -> bool {
        let inserted = self.members.insert(user_id);
        if inserted {
            self.updated_at = Utc::now();
        }
        inserted
    }

    /// Remove a user from the roster
    ///
    /// Returns `false` if the user was not a member. The creator may be
    /// removed like anyone else; `created_by` keeps its value.
    pub fn remove_member(&mut self, user_id: Snowflake) -> bool {
        let removed = self.members.remove(&user_id);
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Number of users on the roster
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Overwrite name and description; roster and creator are untouched
    pub fn set_details(&mut self, name: String, description: String) {
        self.name = name;
        self.description = description;
        self.updated_at = Utc::now();
    }
}
