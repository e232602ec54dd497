use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub reaction_free_days: u32,
    pub flagged_foods: u32,
    pub tracked_meals: u32,
    pub symptoms_this_week: u32,
}

/// Reaction counts for the six calendar months ending at the reference month,
/// oldest first. Every vector holds exactly [`SERIES_MONTHS`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeverityTimeSeries {
    pub months: Vec<String>,
    pub mild: Vec<u32>,
    pub moderate: Vec<u32>,
    pub severe: Vec<u32>,
}

pub const SERIES_MONTHS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Safe,
    Warning,
    Alert,
}

/// Dashboard line for one recent journal day, built from its first meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntrySummary {
    pub date: NaiveDate,
    /// "Today", "Yesterday" or e.g. "Mar 28".
    pub label: String,
    pub meal_name: String,
    pub items: String,
    pub time: String,
    pub status: EntryStatus,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub as_of: NaiveDate,
    pub stats: DashboardStats,
    pub severity_series: SeverityTimeSeries,
    pub recent_entries: Vec<RecentEntrySummary>,
}

#[derive(Debug, Clone)]
pub struct GetDashboardInput {
    pub as_of: NaiveDate,
    pub recent_limit: usize,
}
