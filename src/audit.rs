//! Audit trail for user actions.
//!
//! One structured log line per audited action. The audit log is the
//! application log, not a table, so it survives schema resets and can be
//! shipped with the rest of the logs.

use crate::middleware::ClientCtx;
use std::fmt::Display;

/// Record that the client performed an action. `detail` is whatever
/// identifies the target, typically a row id.
pub fn record(client: &ClientCtx, action: &str, detail: impl Display) {
    log::info!(
        "audit: user '{}' performed '{}' [{}]",
        client.get_name(),
        action,
        detail
    );
}
