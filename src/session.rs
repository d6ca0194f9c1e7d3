//! Server-side session store.
//!
//! Sessions are kept in-process in a DashMap keyed by a UUID token. The token
//! is handed to the browser through the signed cookie session, so the cookie
//! only ever carries an opaque reference.

use crate::db::get_db_pool;
use crate::user::Profile;
use argon2::Argon2;
use chrono::{Duration, NaiveDateTime, Utc};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: i32,
    pub expires_at: NaiveDateTime,
}

pub type SessionMap = DashMap<Uuid, Session>;

static SESSIONS: Lazy<SessionMap> = Lazy::new(DashMap::new);
static ARGON2: Lazy<Argon2<'static>> = Lazy::new(Argon2::default);

/// Force initialization of module statics. Called once at startup so unit
/// tests and the binary share the same bootstrap path.
pub fn init() {
    Lazy::force(&SESSIONS);
    Lazy::force(&ARGON2);
}

pub fn get_sess() -> &'static SessionMap {
    &SESSIONS
}

pub fn get_argon2() -> &'static Argon2<'static> {
    &ARGON2
}

fn session_lifetime() -> Duration {
    Duration::minutes(crate::app_config::security().session_lifetime_minutes as i64)
}

/// Create a session for a user and return its token.
pub fn new_session(sessions: &SessionMap, user_id: i32) -> Uuid {
    let uuid = Uuid::new_v4();
    sessions.insert(
        uuid,
        Session {
            user_id,
            expires_at: Utc::now().naive_utc() + session_lifetime(),
        },
    );
    uuid
}

/// Remove a session. Returns true if it existed.
pub fn remove_session(sessions: &SessionMap, uuid: Uuid) -> bool {
    sessions.remove(&uuid).is_some()
}

/// Look up a live session by token. Expired entries are dropped on access.
pub fn authenticate_by_uuid(sessions: &SessionMap, uuid: Uuid) -> Option<Session> {
    let session = sessions.get(&uuid)?.clone();
    if session.expires_at < Utc::now().naive_utc() {
        sessions.remove(&uuid);
        return None;
    }
    Some(session)
}

/// Resolve the "token" value in the cookie session to a live session.
pub async fn authenticate_by_cookie(cookies: &actix_session::Session) -> Option<(Uuid, Session)> {
    let token = match cookies.get::<String>("token") {
        Ok(Some(token)) => token,
        Ok(None) => return None,
        Err(e) => {
            log::error!("authenticate_by_cookie: cookies.get() {}", e);
            return None;
        }
    };

    let uuid = match Uuid::parse_str(&token) {
        Ok(uuid) => uuid,
        Err(e) => {
            log::debug!("authenticate_by_cookie: bad token: {}", e);
            return None;
        }
    };

    authenticate_by_uuid(get_sess(), uuid).map(|session| (uuid, session))
}

/// Resolve the cookie session to a full user profile, or None for guests.
pub async fn authenticate_client_by_session(cookies: &actix_session::Session) -> Option<Profile> {
    let (_, session) = authenticate_by_cookie(cookies).await?;

    match Profile::get_by_id(get_db_pool(), session.user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("authenticate_client_by_session: {}", e);
            None
        }
    }
}

/// Drop all expired sessions. Run from a periodic task.
pub fn expire_sessions(sessions: &SessionMap) {
    let now = Utc::now().naive_utc();
    sessions.retain(|_, session| session.expires_at >= now);
}
