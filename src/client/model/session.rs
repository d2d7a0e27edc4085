use std::{cell::RefCell, rc::Rc};

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::{
    client::{
        constant::{TOKEN_KEY, USER_KEY},
        model::storage::SessionStorage,
    },
    model::role::Role,
};

/// The cached profile of the logged-in user.
///
/// `/check-auth` only reports username and role; `id` is filled when the backend
/// provides one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub role: String,
}

impl SessionUser {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            role: role.into(),
        }
    }

    pub fn role_rank(&self) -> u8 {
        Role::rank_of(&self.role)
    }

    /// Whether this user's rank reaches `required` in the role hierarchy.
    pub fn has_permission(&self, required: Role) -> bool {
        self.role_rank() >= required.rank()
    }
}

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    user: Option<SessionUser>,
}

struct SessionInner {
    storage: Box<dyn SessionStorage>,
    state: RefCell<SessionState>,
    on_logout: RefCell<Option<Rc<dyn Fn()>>>,
}

/// Shared handle to the bearer token and cached user.
///
/// Built once at startup and cloned into every consumer. Every mutation is written
/// through to storage immediately so a reload restores the session without a request.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    /// Restores the session persisted in `storage`.
    ///
    /// A cached user that no longer parses is dropped, which leaves the session
    /// unauthenticated.
    pub fn restore(storage: impl SessionStorage + 'static) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|token| !token.is_empty());
        let user = storage.get(USER_KEY).and_then(|raw| {
            serde_json::from_str::<Option<SessionUser>>(&raw)
                .map_err(|err| tracing::warn!("Discarding unreadable cached user: {}", err))
                .ok()
                .flatten()
        });

        Self {
            inner: Rc::new(SessionInner {
                storage: Box::new(storage),
                state: RefCell::new(SessionState { token, user }),
                on_logout: RefCell::new(None),
            }),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.inner.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        let state = self.inner.state.borrow();
        state.token.is_some() && state.user.is_some()
    }

    /// Compares the cached user's role against `required`. False without a user.
    pub fn has_permission(&self, required: Role) -> bool {
        self.inner
            .state
            .borrow()
            .user
            .as_ref()
            .is_some_and(|user| user.has_permission(required))
    }

    /// Stores a freshly issued token together with its user.
    pub fn establish(&self, token: String, user: SessionUser) {
        self.inner.storage.set(TOKEN_KEY, &token);
        self.persist_user(&user);

        let mut state = self.inner.state.borrow_mut();
        state.token = Some(token);
        state.user = Some(user);
    }

    /// Replaces the cached user after a successful re-validation.
    ///
    /// Keeps the known id when the refreshed profile does not carry one.
    pub fn refresh_user(&self, mut user: SessionUser) {
        if user.id.is_none() {
            user.id = self.inner.state.borrow().user.as_ref().and_then(|u| u.id);
        }
        self.persist_user(&user);
        self.inner.state.borrow_mut().user = Some(user);
    }

    /// Clears token and user, then notifies the logout listener.
    pub fn logout(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            state.token = None;
            state.user = None;
        }
        self.inner.storage.remove(TOKEN_KEY);
        self.inner.storage.remove(USER_KEY);

        let listener = self.inner.on_logout.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    /// Registers the callback run after every logout; it sends the user back to the
    /// login screen.
    pub fn set_logout_listener(&self, listener: impl Fn() + 'static) {
        *self.inner.on_logout.borrow_mut() = Some(Rc::new(listener));
    }

    fn persist_user(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(raw) => self.inner.storage.set(USER_KEY, &raw),
            Err(err) => tracing::warn!("Failed to persist user: {}", err),
        }
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
