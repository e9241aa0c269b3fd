//! Custom tracing layers
//!
//! [`SessionContextLayer`] copies the active session context onto every new
//! span so later layers can read the user a span was opened for.

use tracing::{Subscriber, span};
use tracing_subscriber::{
    layer::{Context, Layer},
    registry::LookupSpan,
};

use crate::context::{SessionContextData, SessionContextGuard};

/// Layer that injects session context into spans
pub struct SessionContextLayer;

impl SessionContextLayer {
    /// Create a new session context layer
    pub fn new() -> Self {
        Self
    }
}

impl Default for SessionContextLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension data stored on spans
#[derive(Debug, Clone)]
pub struct SessionContextExtension {
    pub data: SessionContextData,
}

impl<S> Layer<S> for SessionContextLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, _attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            if let Some(session) = SessionContextGuard::current() {
                span.extensions_mut()
                    .insert(SessionContextExtension { data: session });
            }
        }
    }
}
