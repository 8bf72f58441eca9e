//! User identity and role dispatch.
//!
//! # Responsibility
//! - Carry the logged-in identity used for per-user data file naming.
//! - Keep the closed role set that behavior dispatches on.

/// Closed set of user roles. Behavior differences are dispatched by
/// matching on the variant, not through trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Guest,
    Student,
}

impl UserRole {
    /// Whether this role may enter and certify grades.
    pub fn can_manage_grades(self) -> bool {
        match self {
            Self::Guest => false,
            Self::Student => true,
        }
    }
}

/// Logged-in user. The username doubles as the per-user data file prefix
/// (`<username>_grades.txt`, `<username>_appointment.ics`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub role: UserRole,
}

impl User {
    pub fn new(username: impl Into<String>, role: UserRole) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Validates credentials against the fixed guest account and returns the
    /// logged-in user, or `None` when the credentials are wrong.
    ///
    /// The only provisioned account (`gast`/`1234`) logs in with the student
    /// role; there is no user directory behind this gate.
    pub fn login(username: &str, password: &str) -> Option<User> {
        if username == "gast" && password == "1234" {
            Some(User::new(username, UserRole::Student))
        } else {
            None
        }
    }

    /// Anonymous read-only session without credentials. Shares the guest
    /// account's data files but carries the restricted guest role.
    pub fn guest() -> User {
        User::new("gast", UserRole::Guest)
    }
}

#[cfg(test)]
mod tests {
    use super::{User, UserRole};

    #[test]
    fn guest_account_logs_in_as_student() {
        let user = User::login("gast", "1234").expect("guest login should succeed");
        assert_eq!(user.username, "gast");
        assert_eq!(user.role, UserRole::Student);
    }

    #[test]
    fn wrong_credentials_are_rejected() {
        assert!(User::login("gast", "wrong").is_none());
        assert!(User::login("admin", "1234").is_none());
    }

    #[test]
    fn role_gates_grade_management() {
        assert!(UserRole::Student.can_manage_grades());
        assert!(!UserRole::Guest.can_manage_grades());
    }

    #[test]
    fn anonymous_guest_session_cannot_manage_grades() {
        let guest = User::guest();
        assert_eq!(guest.role, UserRole::Guest);
        assert_eq!(guest.username, "gast");
        assert!(!guest.role.can_manage_grades());
    }
}
