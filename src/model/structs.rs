use serde::Deserialize;

// Common data structures used across all platforms

/// Server-assigned capability label attached to an account.
///
/// The backend also issues labels like `viewer` and `user`; they gate no
/// section and are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
    Other(String),
}

impl Role {
    pub fn parse(label: &str) -> Role {
        match label {
            "admin" => Role::Admin,
            "editor" => Role::Editor,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Other(label) => label,
        }
    }

    /// Admins and editors may create and update courses.
    pub fn can_manage_courses(&self) -> bool {
        matches!(self, Role::Admin | Role::Editor)
    }

    /// Only admins may delete courses.
    pub fn can_delete_courses(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// In-memory credential/role pair established by a successful login.
///
/// Created empty at startup, written once by the login completion handler,
/// never cleared. There is no logout or token-expiry path.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Shape of a login response body. The token is absent when the backend
/// rejected the credentials; that absence is the only failure signal the
/// page acts on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginOutcome {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Loose `{msg}` body returned by register and the course mutations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub msg: Option<String>,
}

/// Identity reported by the session-verification endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_round_trip() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("editor"), Role::Editor);
        assert_eq!(Role::parse("viewer"), Role::Other("viewer".to_string()));
        assert_eq!(Role::parse("viewer").as_str(), "viewer");
    }

    #[test]
    fn gating_follows_role() {
        assert!(Role::Admin.can_manage_courses());
        assert!(Role::Admin.can_delete_courses());
        assert!(Role::Editor.can_manage_courses());
        assert!(!Role::Editor.can_delete_courses());
        assert!(!Role::parse("user").can_manage_courses());
        assert!(!Role::parse("user").can_delete_courses());
    }
}
