use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Session(String),
    Template(askama::Error),
    Network(reqwest::Error),
    /// Non-2xx answer from the Harvest API. The original status is kept so
    /// callers can tell "unauthorized" from "rate limited"; the response to
    /// the browser is uniform regardless.
    Upstream { status: StatusCode, body: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Network(e) => write!(f, "Network error: {e}"),
            AppError::Upstream { status, .. } => {
                write!(f, "Harvest API error: {status}")
            }
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Session(_) => HttpResponse::SeeOther()
                .insert_header(("Location", "/login"))
                .finish(),
            AppError::Upstream { .. } | AppError::Network(_) => {
                log::error!("{self}");
                HttpResponse::BadGateway().body("Failed to fetch data from Harvest API")
            }
            AppError::Template(e) => {
                log::error!("Template error: {e}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

/// Render an askama template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
