//! Diagnostics about capture anomalies
//!
//! Notices such as skipped indexers or failing accessors are not errors; they
//! are emitted as `tracing` events and, when a handler has been enabled,
//! forwarded to it as plain text.
//!
//! # Example
//!
//! ```
//! use rust_log_capture::self_log;
//!
//! self_log::enable(|message| eprintln!("[capture] {}", message));
//! self_log::disable();
//! ```

use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Handler receiving self-log notices
pub type SelfLogHandler = Arc<dyn Fn(&str) + Send + Sync>;

static HANDLER: LazyLock<RwLock<Option<SelfLogHandler>>> =
    LazyLock::new(|| RwLock::new(None));

/// Route notices to `handler` in addition to `tracing`
pub fn enable<F>(handler: F)
where
    F: Fn(&str) + Send + Sync + 'static,
{
    *HANDLER.write() = Some(Arc::new(handler));
}

/// Stop forwarding notices to the handler
pub fn disable() {
    *HANDLER.write() = None;
}

pub fn is_enabled() -> bool {
    HANDLER.read().is_some()
}

/// Emit a notice
pub fn write(args: fmt::Arguments<'_>) {
    let message = args.to_string();
    tracing::debug!(target: "rust_log_capture::self_log", "{}", message);

    // Clone out of the lock so a handler may call back into this module
    let handler = HANDLER.read().clone();
    if let Some(handler) = handler {
        handler(&message);
    }
}

macro_rules! self_log {
    ($($arg:tt)+) => {
        $crate::core::self_log::write(format_args!($($arg)+))
    };
}

pub(crate) use self_log;
