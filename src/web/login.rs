use crate::db::get_db_pool;
use crate::flash;
use crate::middleware::ClientCtx;
use crate::session;
use crate::session::{get_argon2, get_sess};
use actix_web::{error, get, post, web, Error, HttpResponse, Responder};
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use askama_actix::{Template, TemplateToResponse};
use sea_orm::DbErr;
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(post_login).service(view_login);
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub client: ClientCtx,
    pub messages: Vec<String>,
}

#[derive(Deserialize)]
pub struct FormData {
    username: String,
    password: String,
}

#[derive(Debug)]
pub enum LoginResultStatus {
    Success,
    BadName,
    BadPassword,
}

pub struct LoginResult {
    pub result: LoginResultStatus,
    user_id: Option<i32>,
}

impl LoginResult {
    fn success(user_id: i32) -> Self {
        Self {
            result: LoginResultStatus::Success,
            user_id: Some(user_id),
        }
    }
    fn fail(result: LoginResultStatus) -> Self {
        Self {
            result,
            user_id: None,
        }
    }
}

/// Verify credentials against the stored Argon2 hash.
pub async fn login(name: &str, pass: &str) -> Result<LoginResult, DbErr> {
    let db = get_db_pool();

    let user = match crate::user::get_user_by_name(db, name.trim()).await? {
        Some(user) => user,
        None => return Ok(LoginResult::fail(LoginResultStatus::BadName)),
    };

    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|e| DbErr::Custom(format!("Stored password hash is unparseable: {}", e)))?;

    if get_argon2()
        .verify_password(pass.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Ok(LoginResult::fail(LoginResultStatus::BadPassword));
    }

    Ok(LoginResult::success(user.id))
}

#[post("/auth/login")]
pub async fn post_login(
    cookies: actix_session::Session,
    form: web::Form<FormData>,
) -> Result<impl Responder, Error> {
    let result = login(&form.username, &form.password).await.map_err(|e| {
        log::error!("post_login: {:?}", e);
        error::ErrorInternalServerError("DB error")
    })?;

    let user_id = match result.result {
        LoginResultStatus::Success => result
            .user_id
            .ok_or_else(|| error::ErrorInternalServerError("login result without user id"))?,
        LoginResultStatus::BadName | LoginResultStatus::BadPassword => {
            log::debug!("login failure: {:?} for {}", result.result, form.username);
            // Use generic message to avoid username enumeration
            flash::push(&cookies, "Invalid username or password.");
            return Ok(HttpResponse::SeeOther()
                .append_header(("Location", "/auth/login"))
                .finish());
        }
    };

    // Fresh cookie session for the new principal
    cookies.renew();

    let uuid = session::new_session(get_sess(), user_id);

    cookies
        .insert("logged_in", true)
        .map_err(|_| error::ErrorInternalServerError("middleware error"))?;

    cookies
        .insert("token", uuid.to_string())
        .map_err(|_| error::ErrorInternalServerError("middleware error"))?;

    Ok(HttpResponse::SeeOther()
        .append_header(("Location", "/products/"))
        .finish())
}

#[get("/auth/login")]
pub async fn view_login(
    client: ClientCtx,
    cookies: actix_session::Session,
) -> Result<impl Responder, Error> {
    let messages = flash::take(&cookies);
    Ok(LoginTemplate { client, messages }.to_response())
}
