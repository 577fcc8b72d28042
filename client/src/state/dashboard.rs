//! Employer dashboard counters.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::DashboardStats;

pub const LOAD_ERROR: &str = "Failed to load dashboard data. Please try again later.";

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
}

/// One rendered stat card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u32,
    pub change: i32,
    /// Accent modifier for the card icon.
    pub tone: &'static str,
}

impl StatCard {
    pub fn change_label(&self) -> String {
        format_change(self.change)
    }

    pub fn is_rising(&self) -> bool {
        self.change >= 0
    }
}

pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard { title: "Leads in Progress", value: stats.in_progress, change: stats.changes.in_progress, tone: "blue" },
        StatCard { title: "Leads Completed", value: stats.completed, change: stats.changes.completed, tone: "green" },
        StatCard { title: "Leads Canceled", value: stats.canceled, change: stats.changes.canceled, tone: "red" },
        StatCard {
            title: "Total Managers",
            value: stats.total_managers,
            change: stats.changes.total_managers,
            tone: "purple",
        },
    ]
}

/// Signed percentage: `+12%`, `-3%`, `+0%`.
pub fn format_change(change: i32) -> String {
    if change >= 0 { format!("+{change}%") } else { format!("{change}%") }
}
