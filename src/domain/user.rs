use serde::{Deserialize, Serialize};

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// Login reply. `token` and `user` are expected only when `success` is true,
/// but nothing rejects a payload that breaks that expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Borrowed reading of a [`LoginResponse`].
#[derive(Debug, PartialEq)]
pub enum LoginOutcome<'a> {
    Authenticated { token: &'a str, user: &'a User },
    Rejected,
    Inconsistent,
}

impl LoginResponse {
    pub fn authenticated(token: impl Into<String>, user: User) -> Self {
        Self {
            success: true,
            token: Some(token.into()),
            user: Some(user),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            token: None,
            user: None,
        }
    }

    /// True when `token` and `user` are both present iff `success` is set.
    pub fn is_consistent(&self) -> bool {
        let present = self.token.is_some() && self.user.is_some();
        let absent = self.token.is_none() && self.user.is_none();
        if self.success { present } else { absent }
    }

    pub fn outcome(&self) -> LoginOutcome<'_> {
        match (self.success, self.token.as_deref(), self.user.as_ref()) {
            (true, Some(token), Some(user)) => LoginOutcome::Authenticated { token, user },
            (false, None, None) => LoginOutcome::Rejected,
            _ => LoginOutcome::Inconsistent,
        }
    }
}

/// Token issued by the REST backend's `login` route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub message: String,
    // The backend misspells the key.
    #[serde(rename = "acces_token")]
    pub access_token: String,
    pub token_type: String,
    pub user: Profile,
}

impl AccessToken {
    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// The signed-in user as returned by `auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
}

impl Profile {
    /// Uppercased first letter of the name, used for avatars.
    pub fn initial(&self) -> Option<String> {
        self.name.chars().next().map(|c| c.to_uppercase().collect())
    }
}
