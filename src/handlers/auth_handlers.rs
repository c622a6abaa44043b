use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::{csrf, session};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub access_key: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    // If already signed in, go straight to the dashboard
    if session::is_authenticated(&session) {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate {
        error: None,
        app_name: config.app_name.clone(),
        csrf_token,
    };
    render(tmpl)
}

pub async fn login_submit(
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // An unset access key locks the dashboard rather than opening it.
    let granted =
        !config.access_key.is_empty() && csrf::constant_time_eq(&config.access_key, &form.access_key);

    if !granted {
        // Never log the submitted value.
        log::warn!("Failed sign-in attempt");
        let csrf_token = csrf::get_or_create_token(&session);
        let tmpl = LoginTemplate {
            error: Some("Invalid access key.".to_string()),
            app_name: config.app_name.clone(),
            csrf_token,
        };
        return render(tmpl);
    }

    session::sign_in(&session).map_err(AppError::Session)?;
    session::set_flash(&session, "Signed in.");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish())
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
