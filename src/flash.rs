//! One-shot flash messages carried in the cookie session.
//!
//! Messages pushed during one request are drained by the next page render.

const FLASH_KEY: &str = "flash";

/// Queue a message for the next rendered page.
pub fn push(cookies: &actix_session::Session, message: impl Into<String>) {
    let mut messages = peek(cookies);
    messages.push(message.into());

    if let Err(e) = cookies.insert(FLASH_KEY, messages) {
        log::error!("flash::push: {}", e);
    }
}

/// Drain all queued messages.
pub fn take(cookies: &actix_session::Session) -> Vec<String> {
    let messages = peek(cookies);
    if !messages.is_empty() {
        cookies.remove(FLASH_KEY);
    }
    messages
}

fn peek(cookies: &actix_session::Session) -> Vec<String> {
    match cookies.get::<Vec<String>>(FLASH_KEY) {
        Ok(Some(messages)) => messages,
        Ok(None) => Vec::new(),
        Err(e) => {
            log::error!("flash::peek: {}", e);
            Vec::new()
        }
    }
}
