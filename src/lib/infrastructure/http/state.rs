//! Application state module

use std::fmt;
use std::sync::Arc;

use crate::domain::contact::ContactService;

/// Global application state
pub struct AppState<C: ContactService> {
    /// Contact dispatch service
    pub contact: Arc<C>,
}

impl<C: ContactService> AppState<C> {
    /// Create a new application state
    pub fn new(contact: C) -> Self {
        Self {
            contact: Arc::new(contact),
        }
    }
}

impl<C: ContactService> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            contact: Arc::clone(&self.contact),
        }
    }
}

impl<C: ContactService> fmt::Debug for AppState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("contact", &"ContactService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::contact::service::MockContactService;

#[cfg(test)]
pub fn test_state(contact: Option<MockContactService>) -> AppState<MockContactService> {
    let contact = contact
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockContactService::new()));

    AppState { contact }
}
