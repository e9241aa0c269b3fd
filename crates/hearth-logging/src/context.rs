//! Session context injection
//!
//! Thread-local storage for the signed-in user, so that every span opened
//! while a [`SessionContextGuard`] is alive carries the user identity.

use std::cell::RefCell;

use uuid::Uuid;

/// Session context data stored in thread-local storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContextData {
    /// The signed-in user's id
    pub user_id: String,
    /// Unique id of this app session
    pub session_id: Uuid,
}

thread_local! {
    static SESSION_CONTEXT: RefCell<Option<SessionContextData>> = const { RefCell::new(None) };
}

/// RAII guard for session context
///
/// When this guard is created, it sets the session context for the current thread.
/// When it's dropped, it restores the previous context (if any).
///
/// # Example
///
/// ```ignore
/// use hearth_logging::context::SessionContextGuard;
///
/// let _guard = SessionContextGuard::new("u1");
///
/// // Spans opened in this scope carry user_id = "u1"
/// tracing::info!("Opened action sheet");
/// ```
pub struct SessionContextGuard {
    previous: Option<SessionContextData>,
}

impl SessionContextGuard {
    /// Create a new session context guard with a fresh session id
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_session_id(user_id, Uuid::new_v4())
    }

    /// Create a guard with a specific session id
    pub fn with_session_id(user_id: impl Into<String>, session_id: Uuid) -> Self {
        let previous = SESSION_CONTEXT.with(|ctx| ctx.borrow().clone());

        let new_ctx = SessionContextData {
            user_id: user_id.into(),
            session_id,
        };

        SESSION_CONTEXT.with(|ctx| *ctx.borrow_mut() = Some(new_ctx));

        Self { previous }
    }

    /// Get the current session context (if any)
    pub fn current() -> Option<SessionContextData> {
        SESSION_CONTEXT.with(|ctx| ctx.borrow().clone())
    }

    /// Get the current user ID (if set)
    pub fn current_user_id() -> Option<String> {
        Self::current().map(|ctx| ctx.user_id)
    }
}

impl Drop for SessionContextGuard {
    fn drop(&mut self) {
        SESSION_CONTEXT.with(|ctx| *ctx.borrow_mut() = self.previous.take());
    }
}
