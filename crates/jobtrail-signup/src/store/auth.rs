use jobtrail_adapter::AuthSession;

/// Whether a session is live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    SignedOut,
    SignedIn,
}

/// Auth slice: the session the rest of the application reads
#[derive(Debug, Default)]
pub struct AuthState {
    pub status: AuthStatus,
    pub session: Option<AuthSession>,
}

impl AuthState {
    pub fn signed_in(&mut self, session: AuthSession) {
        self.session = Some(session);
        self.status = AuthStatus::SignedIn;
    }

    pub fn signed_out(&mut self) {
        self.session = None;
        self.status = AuthStatus::SignedOut;
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::SignedIn
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }
}
