//! Alert tracking and notification delivery.
//!
//! - [`AlertTracker`] -- turns per-tick violations into at most one
//!   notification per metric for the lifetime of the process.
//! - [`AlertState`] -- the sticky, lock-free "already notified" flags.
//! - [`delivery`] -- the [`Notifier`] seam and its SMTP implementation.

pub mod alerts;
pub mod delivery;

pub use alerts::{AlertNotice, AlertState, AlertTracker};
pub use delivery::email::{EmailConfig, EmailDelivery};
pub use delivery::{Notifier, NotifyError};
