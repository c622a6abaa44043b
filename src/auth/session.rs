use actix_session::Session;

const AUTH_KEY: &str = "authenticated";

/// Whether this cookie session has completed the sign-in handshake.
pub fn is_authenticated(session: &Session) -> bool {
    session.get::<bool>(AUTH_KEY).unwrap_or(None).unwrap_or(false)
}

pub fn sign_in(session: &Session) -> Result<(), String> {
    session
        .insert(AUTH_KEY, true)
        .map_err(|e| format!("Session error: {e}"))
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}
