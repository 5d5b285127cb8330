use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// A league member as returned by the users endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization() {
        let json = r#"[
            {"user_id": "u1", "display_name": "Ava", "metadata": {"team_name": "Ava Maria", "avatar": "x"}},
            {"user_id": "u2", "display_name": "Ben", "metadata": null},
            {"user_id": "u3"}
        ]"#;

        let users: Vec<User> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(
            users[0].metadata.as_ref().and_then(|m| m.team_name.as_deref()),
            Some("Ava Maria")
        );
        assert!(users[1].metadata.is_none());
        assert!(users[2].display_name.is_none());
    }
}
