//! Authentication collaborator used by the fitness tracker.

use std::sync::{PoisonError, RwLock};

const FALLBACK_NAME: &str = "Fitness Enthusiast";
const FALLBACK_INITIAL: char = 'U';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
}

/// Session provider. `logout` asks for the session to end; callers do
/// not inspect any outcome.
pub trait SessionClient: Send + Sync {
    fn current_user(&self) -> Option<User>;
    fn logout(&self);
}

/// In-process stand-in for the hosted auth service.
#[derive(Debug, Default)]
pub struct StubSession {
    user: RwLock<Option<User>>,
}

impl StubSession {
    pub fn new(user: Option<User>) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }
}

impl SessionClient for StubSession {
    fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn logout(&self) {
        let ended = self
            .user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match ended {
            Some(user) => tracing::info!(email = %user.email, "session ended"),
            None => tracing::debug!("logout requested without an active session"),
        }
    }
}

/// Local part of the email, or a generic name when signed out.
pub fn display_name(user: Option<&User>) -> String {
    user.and_then(|u| u.email.split('@').next())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

pub fn avatar_initial(user: Option<&User>) -> char {
    user.and_then(|u| u.email.chars().next())
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or(FALLBACK_INITIAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete() -> User {
        User {
            email: "sam.lifts@example.com".into(),
        }
    }

    #[test]
    fn names_come_from_the_email() {
        let user = athlete();
        assert_eq!(display_name(Some(&user)), "sam.lifts");
        assert_eq!(avatar_initial(Some(&user)), 'S');
    }

    #[test]
    fn signed_out_falls_back() {
        assert_eq!(display_name(None), "Fitness Enthusiast");
        assert_eq!(avatar_initial(None), 'U');

        let odd = User {
            email: "@example.com".into(),
        };
        assert_eq!(display_name(Some(&odd)), "Fitness Enthusiast");
    }

    #[test]
    fn logout_forgets_the_user() {
        let session = StubSession::new(Some(athlete()));
        assert_eq!(session.current_user(), Some(athlete()));
        session.logout();
        assert_eq!(session.current_user(), None);
        session.logout();
        assert_eq!(session.current_user(), None);
    }
}
