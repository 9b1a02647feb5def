//! Session State
//!
//! Explicit two-state session model. Authentication here is intentionally
//! mock: any well-formed email with a non-empty password is accepted. A real
//! deployment would replace [`Session::login`] with credential verification
//! against an identity provider.

/// An authenticated dashboard user
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    /// The email address used to sign in
    pub email: String,
}

/// Application session state, owned by the app root and passed down
/// explicitly. There is no ambient auth flag; components observe this value
/// through the global state signal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Session {
    /// No user signed in; the login page is shown
    #[default]
    Unauthenticated,
    /// A user is signed in; the dashboard shell is shown
    Authenticated(User),
}

impl Session {
    /// Attempts a mock login. Succeeds for any non-empty credentials with a
    /// structurally valid email.
    pub fn login(email: &str, password: &str) -> Option<Self> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() || !is_valid_email(email) {
            return None;
        }
        Some(Session::Authenticated(User {
            email: email.to_string(),
        }))
    }

    /// Whether a user is currently signed in
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Unauthenticated => None,
        }
    }
}

/// Permissive structural email check: no whitespace, exactly one `@` with a
/// non-empty local part, and a dot inside the domain. Deliberately loose;
/// this gate only keeps obvious typos out of the mock login.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with characters on both sides
    domain
        .rsplit_once('.')
        .is_some_and(|(head, tld)| !head.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no domain@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain."));
    }

    #[test]
    fn test_login_accepts_any_nonempty_credentials() {
        let session = Session::login("user@example.com", "hunter2").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().email, "user@example.com");
    }

    #[test]
    fn test_login_rejects_empty_or_malformed() {
        assert!(Session::login("user@example.com", "").is_none());
        assert!(Session::login("user@example.com", "   ").is_none());
        assert!(Session::login("", "password").is_none());
        assert!(Session::login("not-an-email", "password").is_none());
    }

    #[test]
    fn test_default_is_unauthenticated() {
        assert!(!Session::default().is_authenticated());
        assert!(Session::default().user().is_none());
    }
}
