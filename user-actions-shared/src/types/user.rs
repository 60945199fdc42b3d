use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a user, shared by users and the actions referencing them.
pub type UserId = i64;

/// A user record as loaded from the users source.
///
/// Users are immutable once loaded; the store hands out owned clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_json_shape() {
        let json = r#"{"id":2,"name":"Alice","createdAt":"2021-07-04T12:47:09.888Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 2);
        assert_eq!(user.name, "Alice");
        assert_eq!(
            user.created_at,
            Utc.with_ymd_and_hms(2021, 7, 4, 12, 47, 9).unwrap()
                + chrono::Duration::milliseconds(888)
        );
    }
}
