use actix_session::Session;
use askama::Template;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::config::AppConfig;
use crate::models::project::ProjectRow;
use crate::models::time_entry::EntryRow;
use crate::models::user::ProfileView;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            csrf_token: csrf::get_or_create_token(session),
            flash: take_flash(session),
        }
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub user: ProfileView,
    pub projects: Vec<ProjectRow>,
    pub entries: Vec<EntryRow>,
    /// `YYYY-MM-DD`; query parameter or today's local date.
    pub selected_date: String,
    /// Entries whose spent date equals `selected_date`.
    pub visible_count: usize,
}
