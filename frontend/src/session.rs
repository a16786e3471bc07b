//! Client-side session: where the auth token lives and how the app leaves
//! a session.
//!
//! Storage and navigation sit behind [`TokenStore`] and [`Navigator`] so the
//! logout flow can run against in-memory fakes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use leptos_router::NavigateOptions;

use crate::error::ClientError;
use crate::routes::HOME_PATH;

const EMAIL_KEY: &str = "userEmail";

/// Keyed string storage that outlives a page load.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove(&self, key: &str);
}

/// Client-side route changes.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// [`TokenStore`] backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        LocalStorage::set(key, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// [`TokenStore`] that keeps everything in a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// [`Navigator`] over the function returned by `use_navigate`.
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// Auth state shared through context.
///
/// The store itself is not reactive, so every write bumps `revision` and
/// every read tracks it. Views that call [`AuthContext::token`] re-render on
/// sign-in and logout.
#[derive(Clone)]
pub struct AuthContext {
    store: Rc<dyn TokenStore>,
    token_key: Rc<str>,
    revision: RwSignal<u64>,
}

impl AuthContext {
    pub fn new(store: Rc<dyn TokenStore>, token_key: &str) -> Self {
        Self {
            store,
            token_key: Rc::from(token_key),
            revision: create_rw_signal(0),
        }
    }

    /// The only place the token is read from.
    pub fn token(&self) -> Option<String> {
        self.revision.with(|_| ());
        self.store.get(&self.token_key)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn email(&self) -> Option<String> {
        self.revision.with(|_| ());
        self.store.get(EMAIL_KEY)
    }

    pub fn sign_in(&self, token: &str, email: &str) -> Result<(), ClientError> {
        self.store.set(&self.token_key, token)?;
        self.store.set(EMAIL_KEY, email)?;
        self.bump();
        tracing::info!("signed in");
        Ok(())
    }

    /// Drops the token and sends the user home. Never fails.
    pub fn logout(&self, navigator: &dyn Navigator) {
        self.store.remove(&self.token_key);
        self.store.remove(EMAIL_KEY);
        self.bump();
        tracing::info!("logged out");
        navigator.navigate(HOME_PATH);
    }

    fn bump(&self) {
        self.revision.update(|revision| *revision += 1);
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
