use dioxus::prelude::*;

use crate::{
    client::model::{permission::PageAccess, session::SessionUser},
    model::role::Role,
};

/// Reactive copy of the session's authentication status for rendering.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new(initial: AuthState) -> Self {
        Self {
            inner: Signal::new(initial),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Stored session not yet re-validated against the backend
    Initializing,
    Authenticated(SessionUser),
    NotLoggedIn,
}

impl From<Option<SessionUser>> for AuthState {
    fn from(user: Option<SessionUser>) -> Self {
        match user {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Check if the user's role reaches `required`
    ///
    /// Note: being logged in is a prerequisite, not a permission.
    pub fn has_permission(&self, required: Role) -> bool {
        self.user().is_some_and(|user| user.has_permission(required))
    }

    pub fn can_access(&self, access: PageAccess) -> bool {
        self.user().is_some_and(|user| access.allows(user))
    }
}
