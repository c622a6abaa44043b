use crate::harvest::types::TimeEntry;

pub const NO_NOTES: &str = "No notes";

/// One logged work record, flattened for the template.
#[derive(Debug, Clone)]
pub struct EntryRow {
    pub id: u64,
    pub client_name: String,
    pub project_name: String,
    pub task_name: String,
    pub hours: f64,
    pub notes: String,
    /// Calendar date as the API sends it, `YYYY-MM-DD`.
    pub spent_date: String,
    /// Whether the row matches the currently selected date. Non-matching
    /// rows are rendered hidden so the client-side filter can reveal them
    /// without a new request.
    pub visible: bool,
}

impl EntryRow {
    pub fn hours_label(&self) -> String {
        format!("{:.1}", self.hours)
    }

    /// Exact calendar-date match against the selected date. The filter is
    /// string equality, not range inclusion.
    pub fn matches_date(&self, date: &str) -> bool {
        self.spent_date == date
    }
}

impl From<TimeEntry> for EntryRow {
    fn from(e: TimeEntry) -> Self {
        let notes = match e.notes {
            Some(n) if !n.is_empty() => n,
            _ => NO_NOTES.to_string(),
        };
        Self {
            id: e.id,
            client_name: e.client.name,
            project_name: e.project.name,
            task_name: e.task.name,
            hours: e.hours,
            notes,
            spent_date: e.spent_date,
            visible: false,
        }
    }
}

/// Apply the date filter: mark matching entries visible and return how many
/// matched. Exact string equality on the calendar date.
pub fn mark_visible(entries: &mut [EntryRow], date: &str) -> usize {
    let mut count = 0;
    for entry in entries.iter_mut() {
        entry.visible = entry.matches_date(date);
        if entry.visible {
            count += 1;
        }
    }
    count
}
