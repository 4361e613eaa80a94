//! One-shot flash message queue stored in the session.
//!
//! Messages are enqueued by one request and drained by the next rendered
//! page; taking the queue removes it, so each message displays exactly once.

use tower_sessions::Session;

use crate::models::session_keys;

/// Append a message to the flash queue.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn push_flash(
    session: &Session,
    message: &str,
) -> Result<(), tower_sessions::session::Error> {
    let mut queue: Vec<String> = session
        .get(session_keys::FLASH)
        .await?
        .unwrap_or_default();
    queue.push(message.to_string());
    session.insert(session_keys::FLASH, &queue).await
}

/// Drain the flash queue, leaving it empty.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn take_flash(session: &Session) -> Result<Vec<String>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<String>>(session_keys::FLASH)
        .await?
        .unwrap_or_default())
}
