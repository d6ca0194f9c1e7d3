use crate::middleware::ClientCtx;
use crate::orm::users::Role;
use actix_web::{get, Error, HttpResponse, Responder};

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_admin_only);
}

/// Role-gated route: 401 for guests, 403 for non-admins.
#[get("/auth/admin_only")]
pub async fn view_admin_only(client: ClientCtx) -> Result<impl Responder, Error> {
    client.require_login()?;
    client.require_role(Role::Admin)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Welcome, administrator!</h1>"))
}
