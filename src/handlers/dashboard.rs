use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Local;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::harvest::HarvestClient;
use crate::models::project::ProjectRow;
use crate::models::time_entry::{self, EntryRow};
use crate::models::user::ProfileView;
use crate::templates_structs::{DashboardTemplate, PageContext};

#[derive(Deserialize)]
pub struct DashboardQuery {
    /// Selected calendar date, `YYYY-MM-DD`. Defaults to today.
    pub date: Option<String>,
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// The dashboard page: profile, active project budgets, and time entries,
/// fetched sequentially from Harvest. Any upstream failure aborts the whole
/// request; there is no partial rendering.
pub async fn index(
    client: web::Data<HarvestClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let profile = client.profile().await?;
    let report = client.budget_report().await?;
    let page = client.time_entries().await?;

    let user = ProfileView::from(profile);
    let projects: Vec<ProjectRow> = report.results.into_iter().map(ProjectRow::from).collect();
    let mut entries: Vec<EntryRow> = page.time_entries.into_iter().map(EntryRow::from).collect();

    let selected_date = query.into_inner().date.unwrap_or_else(today);
    let visible_count = time_entry::mark_visible(&mut entries, &selected_date);

    let ctx = PageContext::build(&session, &config);
    let tmpl = DashboardTemplate {
        ctx,
        user,
        projects,
        entries,
        selected_date,
        visible_count,
    };
    render(tmpl)
}
