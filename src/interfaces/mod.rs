// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod error_handler;
mod notation;

pub use error_handler::{
    ChannelErrorHandler, ErrorChannel, ErrorHandler, EventKind, LoggingErrorHandler,
    NoOpErrorHandler, NumericEvent, SubscriptionId,
};
pub use notation::Notation;
