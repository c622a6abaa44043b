use serde::Deserialize;

/// Wire types for the Harvest v2 API. Deserialization is lenient: a field
/// the API omits becomes its default and renders as empty (or a placeholder)
/// at the view layer, never as a request failure.

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// `GET /api/v2/reports/project_budget` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetReport {
    #[serde(default)]
    pub results: Vec<ProjectBudget>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectBudget {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub project_name: String,
    /// Budgeted hours; null for projects without a budget.
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub budget_spent: Option<f64>,
    #[serde(default)]
    pub budget_remaining: Option<f64>,
}

/// `GET /api/v2/time_entries` envelope (first page only; no pagination).
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntryPage {
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntry {
    pub id: u64,
    #[serde(default)]
    pub spent_date: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub client: Ref,
    #[serde(default)]
    pub project: Ref,
    #[serde(default)]
    pub task: Ref,
}

/// Nested `{id, name}` reference as Harvest embeds it on time entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ref {
    #[serde(default)]
    pub name: String,
}
