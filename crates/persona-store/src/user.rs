use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Latest personality type, e.g. `INTJ-A`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Fields supplied on sign-up; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            bio: None,
        }
    }

    pub(crate) fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            type_code: None,
            bio: self.bio,
        }
    }
}

/// Emails compare case-insensitively.
pub(crate) fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}
