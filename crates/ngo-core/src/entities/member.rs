//! Member entity - a person shown on the organization's team page

use chrono::{DateTime, Utc};

/// Member entity
///
/// Members are soft deleted: deleting one only sets `deleted`, and every
/// lookup treats a deleted member as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Store-assigned identity (0 until persisted)
    pub id: i64,
    pub name: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub image: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Member {
    /// Create a new, not yet persisted Member with the required fields
    pub fn new(name: String, image: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            facebook_url: None,
            instagram_url: None,
            linkedin_url: None,
            image,
            description: None,
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    /// Check if the member is still visible
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Mark the member as deleted
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation() {
        let member = Member::new("Maria".to_string(), "http://img/maria.png".to_string());
        assert_eq!(member.id, 0);
        assert_eq!(member.name, "Maria");
        assert!(member.facebook_url.is_none());
        assert!(member.is_active());
        assert_eq!(member.created_at, member.updated_at);
    }

    #[test]
    fn test_mark_deleted_is_one_way() {
        let mut member = Member::new("Maria".to_string(), "img".to_string());
        member.mark_deleted();
        assert!(!member.is_active());

        member.mark_deleted();
        assert!(member.deleted);
    }
}
