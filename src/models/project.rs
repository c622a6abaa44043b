use crate::harvest::types::ProjectBudget;

/// One row of the budget table, with progress precomputed for the template.
#[derive(Debug, Clone)]
pub struct ProjectRow {
    pub client_name: String,
    pub project_name: String,
    pub budget: f64,
    pub budget_spent: f64,
    pub budget_remaining: f64,
    /// `spent / budget * 100`; 0 when there is no budget. Not clamped, so
    /// an over-budget project reads e.g. "125%".
    pub progress_pct: f64,
    pub over_budget: bool,
}

impl ProjectRow {
    /// Badge tone, in component-library vocabulary.
    pub fn tone(&self) -> &'static str {
        if self.over_budget { "critical" } else { "highlight" }
    }

    pub fn status_label(&self) -> &'static str {
        if self.over_budget { "Over budget" } else { "On track" }
    }

    /// Progress bar width in percent, capped at 100 for rendering.
    pub fn bar_width(&self) -> u32 {
        self.progress_pct.min(100.0).round() as u32
    }

    pub fn progress_label(&self) -> String {
        format!("{:.0}%", self.progress_pct)
    }

    pub fn hours_label(hours: f64) -> String {
        format!("{hours:.1}")
    }

    pub fn budget_label(&self) -> String {
        Self::hours_label(self.budget)
    }

    pub fn spent_label(&self) -> String {
        Self::hours_label(self.budget_spent)
    }

    pub fn remaining_label(&self) -> String {
        Self::hours_label(self.budget_remaining)
    }
}

impl From<ProjectBudget> for ProjectRow {
    fn from(p: ProjectBudget) -> Self {
        let budget = p.budget.unwrap_or(0.0);
        let budget_spent = p.budget_spent.unwrap_or(0.0);
        let budget_remaining = p.budget_remaining.unwrap_or(0.0);
        let progress_pct = if budget > 0.0 {
            budget_spent / budget * 100.0
        } else {
            0.0
        };
        Self {
            client_name: p.client_name,
            project_name: p.project_name,
            budget,
            budget_spent,
            budget_remaining,
            progress_pct,
            over_budget: budget_spent > budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(budget: Option<f64>, spent: Option<f64>) -> ProjectBudget {
        ProjectBudget {
            client_name: "Acme".to_string(),
            project_name: "Site".to_string(),
            budget,
            budget_spent: spent,
            budget_remaining: None,
        }
    }

    #[test]
    fn zero_budget_yields_zero_progress() {
        let row = ProjectRow::from(budget(Some(0.0), Some(10.0)));
        assert_eq!(row.progress_pct, 0.0);
        assert_eq!(row.bar_width(), 0);
    }

    #[test]
    fn missing_budget_yields_zero_progress() {
        let row = ProjectRow::from(budget(None, Some(10.0)));
        assert_eq!(row.progress_pct, 0.0);
    }

    #[test]
    fn progress_is_spent_over_budget() {
        let row = ProjectRow::from(budget(Some(40.0), Some(10.0)));
        assert_eq!(row.progress_pct, 25.0);
        assert_eq!(row.progress_label(), "25%");
        assert_eq!(row.bar_width(), 25);
    }

    #[test]
    fn over_budget_project_is_critical() {
        let row = ProjectRow::from(budget(Some(10.0), Some(12.5)));
        assert!(row.over_budget);
        assert_eq!(row.tone(), "critical");
        assert_eq!(row.status_label(), "Over budget");
        assert_eq!(row.progress_pct, 125.0);
        // Bar never overflows its track even when progress does.
        assert_eq!(row.bar_width(), 100);
    }

    #[test]
    fn on_budget_project_is_highlight() {
        let row = ProjectRow::from(budget(Some(10.0), Some(10.0)));
        assert!(!row.over_budget);
        assert_eq!(row.tone(), "highlight");
        assert_eq!(row.status_label(), "On track");
    }
}
