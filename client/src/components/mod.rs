//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell, dialogs, and small display
//! widgets while reading shared session and notification state from Leptos
//! context providers.

pub mod confirm_dialog;
pub mod layout;
pub mod lead_dialog;
pub mod loading_spinner;
pub mod manager_dialog;
pub mod notification_host;
pub mod protected_route;
pub mod stats_card;
pub mod status_badge;
pub mod status_dialog;
