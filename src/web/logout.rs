use crate::session::{get_sess, remove_session};
use actix_web::{get, Error, HttpResponse, Responder};
use uuid::Uuid;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_logout);
}

#[get("/auth/logout")]
pub async fn view_logout(cookies: actix_session::Session) -> Result<impl Responder, Error> {
    // Remove session from the server-side session store
    match cookies.get::<String>("token") {
        Ok(Some(token)) => match Uuid::parse_str(&token) {
            Ok(uuid) => {
                if !remove_session(get_sess(), uuid) {
                    log::debug!("view_logout: session already expired");
                }
            }
            Err(e) => {
                log::error!("view_logout: parse_str() {}", e);
            }
        },
        Ok(None) => {
            log::debug!("view_logout: missing token (already logged out?)");
        }
        Err(e) => {
            log::error!("view_logout: cookies.get() {}", e);
        }
    }

    // Remove session cookies
    cookies.remove("logged_in");
    cookies.remove("token");

    Ok(HttpResponse::SeeOther()
        .append_header(("Location", "/auth/login"))
        .finish())
}
