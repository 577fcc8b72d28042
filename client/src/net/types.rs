//! REST DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the CRM API's camelCase JSON payloads. Identifiers are
//! opaque strings; the API may emit them as `_id`, which every record accepts
//! as an alias.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Access role attached to an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employer,
    Manager,
}

impl Role {
    /// Route a session of this role lands on after login or a role mismatch.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Employer => "/employer/dashboard",
            Role::Manager => "/manager/leads",
        }
    }

    /// Path prefix of the route subtree this role may enter.
    pub fn route_prefix(self) -> &'static str {
        match self {
            Role::Employer => "/employer",
            Role::Manager => "/manager",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Employer => "Employer",
            Role::Manager => "Manager",
        }
    }
}

/// The authenticated user as returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, when the API includes it.
    #[serde(default)]
    pub email: String,
    /// Role deciding which route subtree the user may access.
    pub role: Role,
}

/// A manager account owned by the current employer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Number of leads currently assigned to this manager.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub leads_count: u32,
}

/// Pipeline stage of a lead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    Pending,
    InProgress,
    Completed,
    Canceled,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::Pending,
        LeadStatus::InProgress,
        LeadStatus::Completed,
        LeadStatus::Canceled,
    ];

    /// Wire form, also used as the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::Pending => "PENDING",
            LeadStatus::InProgress => "IN_PROGRESS",
            LeadStatus::Completed => "COMPLETED",
            LeadStatus::Canceled => "CANCELED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::Pending => "Pending",
            LeadStatus::InProgress => "In Progress",
            LeadStatus::Completed => "Completed",
            LeadStatus::Canceled => "Canceled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            LeadStatus::Pending => "badge-pending",
            LeadStatus::InProgress => "badge-in-progress",
            LeadStatus::Completed => "badge-completed",
            LeadStatus::Canceled => "badge-canceled",
        }
    }

    /// Parse a wire/option value. Empty or unknown input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

/// A sales lead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(alias = "_id")]
    pub id: String,
    pub contact_name: String,
    pub contact_email: String,
    pub company_name: String,
    pub status: LeadStatus,
    #[serde(default)]
    pub manager_id: Option<String>,
    #[serde(default)]
    pub manager_name: Option<String>,
    /// Free-form notes; the API sends either one string or a list.
    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Employer dashboard counters with month-over-month change percentages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub in_progress: u32,
    pub completed: u32,
    pub canceled: u32,
    pub total_managers: u32,
    #[serde(default)]
    pub changes: StatChanges,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatChanges {
    pub in_progress: i32,
    pub completed: i32,
    pub canceled: i32,
    pub total_managers: i32,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Create/update body for a manager. An absent password leaves it unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManagerPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Create/update body for a lead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub contact_name: String,
    pub contact_email: String,
    pub company_name: String,
    pub status: LeadStatus,
    pub manager_id: Option<String>,
    pub notes: String,
}

/// Body of `PATCH /manager/leads/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadStatusUpdate {
    pub status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

fn deserialize_notes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::String(note) if note.trim().is_empty() => Ok(Vec::new()),
        serde_json::Value::String(note) => Ok(vec![note]),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(note) => Ok(note),
                _ => Err(D::Error::custom("expected note string")),
            })
            .collect(),
        _ => Err(D::Error::custom("expected note string or list")),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| D::Error::custom("expected non-negative count")),
        _ => Err(D::Error::custom("expected number")),
    }
}
