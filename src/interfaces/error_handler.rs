// ============================================================================
// Error Handler Interface
// Subscriber registry for numeric errors and warnings
// ============================================================================

use chrono::{DateTime, Utc};
use crossbeam::channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity of a reported event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// Fatal: the value under construction was not produced
    Error,
    /// Recoverable: a sentinel value was produced instead
    Warning,
}

/// Event fired on the error channel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericEvent {
    pub kind: EventKind,
    pub message: String,
    /// Operation that raised the event, e.g. `"Rational::new"`
    pub method: String,
    pub timestamp: DateTime<Utc>,
}

impl NumericEvent {
    pub fn error(message: impl Into<String>, method: &'static str) -> Self {
        Self {
            kind: EventKind::Error,
            message: message.into(),
            method: method.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn warning(message: impl Into<String>, method: &'static str) -> Self {
        Self {
            kind: EventKind::Warning,
            message: message.into(),
            method: method.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Handler trait for processing numeric events
/// Implementations can handle logging, collection, notifications, etc.
pub trait ErrorHandler: Send + Sync {
    /// Handle a single event
    fn on_event(&self, event: &NumericEvent);
}

/// No-op handler for testing
pub struct NoOpErrorHandler;

impl ErrorHandler for NoOpErrorHandler {
    fn on_event(&self, _event: &NumericEvent) {
        // Do nothing
    }
}

/// Logging handler
pub struct LoggingErrorHandler;

impl ErrorHandler for LoggingErrorHandler {
    fn on_event(&self, event: &NumericEvent) {
        match event.kind {
            EventKind::Error => {
                tracing::warn!(method = %event.method, "numeric error: {}", event.message)
            },
            EventKind::Warning => {
                tracing::debug!(method = %event.method, "numeric warning: {}", event.message)
            },
        }
    }
}

/// Forwards every event into a crossbeam channel.
///
/// Send failures (receiver dropped) are ignored.
pub struct ChannelErrorHandler {
    sender: Sender<NumericEvent>,
}

impl ChannelErrorHandler {
    pub fn new(sender: Sender<NumericEvent>) -> Self {
        Self { sender }
    }
}

impl ErrorHandler for ChannelErrorHandler {
    fn on_event(&self, event: &NumericEvent) {
        let _ = self.sender.send(event.clone());
    }
}

// ============================================================================
// Subscriber Registry
// ============================================================================

/// Handle returned by [`ErrorChannel::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    handler: Arc<dyn ErrorHandler>,
}

/// Registry of error and warning subscribers.
///
/// Subscribing the same handler (by pointer) twice for the same kind returns
/// the existing id; unsubscribing an unknown id does nothing.
#[derive(Default)]
pub struct ErrorChannel {
    subscribers: RwLock<Vec<Subscription>>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to events of `kind`.
    pub fn on(&self, kind: EventKind, handler: Arc<dyn ErrorHandler>) -> SubscriptionId {
        let mut subscribers = self.subscribers.write();

        if let Some(existing) = subscribers
            .iter()
            .find(|s| s.kind == kind && Arc::ptr_eq(&s.handler, &handler))
        {
            return existing.id;
        }

        let id = SubscriptionId::new();
        subscribers.push(Subscription { id, kind, handler });
        id
    }

    /// Remove a subscription. Returns `true` if it was present.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// Number of live subscriptions for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers
            .read()
            .iter()
            .filter(|s| s.kind == kind)
            .count()
    }

    /// Deliver `event` to every subscriber of its kind.
    pub fn emit(&self, event: &NumericEvent) {
        // Handlers are cloned out so a handler may subscribe/unsubscribe
        // without deadlocking on the registry lock.
        let handlers: Vec<Arc<dyn ErrorHandler>> = self
            .subscribers
            .read()
            .iter()
            .filter(|s| s.kind == event.kind)
            .map(|s| Arc::clone(&s.handler))
            .collect();

        for handler in handlers {
            handler.on_event(event);
        }
    }

    /// Fire an error event.
    pub fn error(&self, message: impl Into<String>, method: &'static str) {
        self.emit(&NumericEvent::error(message, method));
    }

    /// Fire a warning event.
    pub fn warning(&self, message: impl Into<String>, method: &'static str) {
        self.emit(&NumericEvent::warning(message, method));
    }
}
