//! Manager-list state and the create/edit form for the employer views.
//!
//! DESIGN
//! ======
//! List inventory and form drafts are plain data; the page owns the signals
//! and the API calls, so filtering and validation are tested without a DOM.

#[cfg(test)]
#[path = "managers_test.rs"]
mod managers_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Manager, ManagerPayload};
use crate::state::notifications::{NotificationsState, notify_error};
use crate::util::validate;

/// Manager inventory for the employer's team page.
#[derive(Clone, Debug, Default)]
pub struct ManagersState {
    pub items: Vec<Manager>,
    pub loading: bool,
    pub search: String,
    generation: u64,
}

impl ManagersState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Start a fetch; its result must come back with the returned ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply the result of the fetch holding `ticket`. Superseded results are
    /// dropped. A failure keeps the previous items and is handed back.
    pub fn apply_fetch(&mut self, ticket: u64, result: Result<Vec<Manager>, ApiError>) -> Result<(), ApiError> {
        if ticket != self.generation {
            log::debug!("dropping superseded manager fetch {ticket}");
            return Ok(());
        }
        self.loading = false;
        self.items = result?;
        Ok(())
    }

    /// Items matching the search box, case-insensitive on name or email.
    pub fn visible(&self) -> Vec<Manager> {
        filter_managers(&self.items, &self.search)
    }

    pub fn empty_message(&self) -> &'static str {
        if self.search.trim().is_empty() {
            "No managers found."
        } else {
            "No managers found. Try adjusting your search."
        }
    }
}

/// Apply a manager fetch to `state`, raising an error toast when it failed.
pub fn settle_fetch(
    state: RwSignal<ManagersState>,
    notifications: RwSignal<NotificationsState>,
    ticket: u64,
    result: Result<Vec<Manager>, ApiError>,
) {
    let mut outcome = Ok(());
    state.update(|s| outcome = s.apply_fetch(ticket, result));
    if let Err(err) = outcome {
        notify_error(notifications, err.user_message("Failed to fetch managers"));
    }
}

pub fn filter_managers(items: &[Manager], search: &str) -> Vec<Manager> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|m| needle.is_empty() || m.name.to_lowercase().contains(&needle) || m.email.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Avatar initials: first letter of each name word.
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|word| word.chars().next()).flat_map(char::to_uppercase).collect()
}

/// Whether a dialog creates a record or edits the one with this id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManagerForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManagerFormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl ManagerFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

impl ManagerForm {
    /// Edit draft; the password is never prefilled.
    pub fn from_manager(manager: &Manager) -> Self {
        Self { name: manager.name.clone(), email: manager.email.clone(), password: String::new() }
    }

    pub fn validate(&self, mode: &FormMode) -> ManagerFormErrors {
        let password = if mode.is_create() {
            validate::password_error(&self.password)
        } else if self.password.is_empty() {
            None
        } else {
            validate::password_error(&self.password)
        };
        ManagerFormErrors {
            name: validate::required(&self.name, "Name is required"),
            email: validate::email_error(&self.email),
            password,
        }
    }

    /// Request body; a blank password on edit is omitted so it stays unchanged.
    pub fn to_payload(&self) -> ManagerPayload {
        ManagerPayload {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: Some(self.password.clone()).filter(|p| !p.is_empty()),
        }
    }
}
