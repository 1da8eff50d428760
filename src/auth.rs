use log::info;

/// What the navbar needs from the session.
pub trait AuthContext {
    fn is_authenticated(&self) -> bool;
    fn logout(&mut self);
}

/// Process-local session. No credentials are checked and nothing is stored.
#[derive(Debug, Default)]
pub struct SessionAuth {
    user: Option<String>,
}

impl SessionAuth {
    pub fn login(&mut self, user: impl Into<String>) {
        let user = user.into();
        info!("session started for {}", user);
        self.user = Some(user);
    }
}

impl AuthContext for SessionAuth {
    fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("session ended for {}", user);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_then_logout() {
        let mut auth = SessionAuth::default();
        assert!(!auth.is_authenticated());

        auth.login("jackson");
        assert!(auth.is_authenticated());
        assert_eq!(auth.user.as_deref(), Some("jackson"));

        auth.logout();
        assert!(!auth.is_authenticated());
        auth.logout();
        assert_eq!(auth.user, None);
    }
}
