//! Lead-list state for the employer and manager lead views.
//!
//! DESIGN
//! ======
//! Status and manager filters are applied by the API (they are part of the
//! request); the search box narrows the fetched page locally. Each fetch
//! carries a load ticket and only the latest one may replace `items`, so a
//! slow response for an old filter cannot overwrite a newer one.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Lead, LeadPayload, LeadStatus, LeadStatusUpdate};
use crate::state::notifications::{NotificationsState, notify_error};
use crate::util::validate;

/// Server-side narrowing for a lead listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFilters {
    pub status: Option<LeadStatus>,
    /// Employer view only; ignored by the manager listing.
    pub manager_id: Option<String>,
}

impl LeadFilters {
    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.manager_id.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default)]
pub struct LeadsState {
    pub items: Vec<Lead>,
    pub loading: bool,
    pub search: String,
    pub filters: LeadFilters,
    generation: u64,
}

impl LeadsState {
    /// Empty state showing the loading indicator until the first fetch lands.
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
    pub fn apply_fetch(&mut self, ticket: u64, result: Result<Vec<Lead>, ApiError>) -> Result<(), ApiError> {
        if ticket != self.generation {
            log::debug!("dropping superseded lead fetch {ticket}");
            return Ok(());
        }
        self.loading = false;
        self.items = result?;
        Ok(())
    }

    pub fn visible(&self) -> Vec<Lead> {
        filter_leads(&self.items, &self.search)
    }

    /// Empty-table text for the employer view.
    pub fn empty_message(&self) -> String {
        let mut message = "No leads found.".to_owned();
        if !self.search.trim().is_empty() {
            message.push_str(" Try adjusting your search.");
        }
        if self.filters.is_active() {
            message.push_str(" Try adjusting your filters.");
        }
        message
    }

    /// Empty-state hint for the manager's own leads.
    pub fn assigned_empty_hint(&self) -> &'static str {
        if !self.search.trim().is_empty() {
            "Try adjusting your search."
        } else if self.filters.status.is_some() {
            "Try adjusting your filters."
        } else {
            "You have no leads assigned to you yet."
        }
    }
}

/// Apply a lead fetch to `state`, raising an error toast when it failed.
pub fn settle_fetch(
    state: RwSignal<LeadsState>,
    notifications: RwSignal<NotificationsState>,
    ticket: u64,
    result: Result<Vec<Lead>, ApiError>,
) {
    let mut outcome = Ok(());
    state.update(|s| outcome = s.apply_fetch(ticket, result));
    if let Err(err) = outcome {
        notify_error(notifications, err.user_message("Failed to fetch leads"));
    }
}

/// Case-insensitive match on contact name, contact email, or company.
pub fn filter_leads(items: &[Lead], search: &str) -> Vec<Lead> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|lead| {
            needle.is_empty()
                || [&lead.contact_name, &lead.contact_email, &lead.company_name]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadForm {
    pub contact_name: String,
    pub contact_email: String,
    pub company_name: String,
    pub status: LeadStatus,
    /// Empty for unassigned.
    pub manager_id: String,
    pub notes: String,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            contact_name: String::new(),
            contact_email: String::new(),
            company_name: String::new(),
            status: LeadStatus::Pending,
            manager_id: String::new(),
            notes: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFormErrors {
    pub contact_name: Option<&'static str>,
    pub contact_email: Option<&'static str>,
    pub company_name: Option<&'static str>,
}

impl LeadFormErrors {
    pub fn is_empty(&self) -> bool {
        self.contact_name.is_none() && self.contact_email.is_none() && self.company_name.is_none()
    }
}

impl LeadForm {
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            contact_name: lead.contact_name.clone(),
            contact_email: lead.contact_email.clone(),
            company_name: lead.company_name.clone(),
            status: lead.status,
            manager_id: lead.manager_id.clone().unwrap_or_default(),
            notes: lead.notes.join("\n"),
        }
    }

    pub fn validate(&self) -> LeadFormErrors {
        let contact_email = if self.contact_email.trim().is_empty() {
            Some("Contact email is required")
        } else {
            validate::email_error(&self.contact_email)
        };
        LeadFormErrors {
            contact_name: validate::required(&self.contact_name, "Contact name is required"),
            contact_email,
            company_name: validate::required(&self.company_name, "Company name is required"),
        }
    }

    pub fn to_payload(&self) -> LeadPayload {
        LeadPayload {
            contact_name: self.contact_name.trim().to_owned(),
            contact_email: self.contact_email.trim().to_owned(),
            company_name: self.company_name.trim().to_owned(),
            status: self.status,
            manager_id: Some(self.manager_id.clone()).filter(|id| !id.is_empty()),
            notes: self.notes.trim().to_owned(),
        }
    }
}

/// Draft for the manager's status-change dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusUpdateForm {
    pub lead_id: String,
    pub current: LeadStatus,
    pub status: LeadStatus,
    pub note: String,
}

impl StatusUpdateForm {
    pub fn for_lead(lead: &Lead) -> Self {
        Self { lead_id: lead.id.clone(), current: lead.status, status: lead.status, note: String::new() }
    }

    /// PATCH body; a blank note is left out.
    pub fn to_update(&self) -> LeadStatusUpdate {
        let note = self.note.trim();
        LeadStatusUpdate { status: self.status, note: (!note.is_empty()).then(|| note.to_owned()) }
    }
}
