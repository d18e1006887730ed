//! # Advisories
//!
//! When a plane fails the range check the user is told to reposition. The
//! pipeline hands the advisory to an injected [`AdvisorySink`] and moves on:
//! delivery never blocks the caller, is never retried, and is silently
//! dropped when the receiving side has gone away.
//!
//! [`ChannelSink`] forwards advisories to whichever task owns the receiver,
//! typically the UI task:
//!
//! ```rust
//! use plane_box::{Advisory, AdvisorySink, ChannelSink, RejectReason};
//!
//! let (sink, mut receiver) = ChannelSink::new();
//! sink.notify(Advisory::new("step back", RejectReason::TooClose));
//! assert_eq!(receiver.try_recv().unwrap().message, "step back");
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::range::RejectReason;

/// A user-facing message emitted for a rejected plane.
///
/// The message text does not depend on `reason`; the reason is carried for
/// logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Text shown to the user.
    pub message: String,
    /// Why the plane was rejected.
    pub reason: RejectReason,
}

impl Advisory {
    /// Creates an advisory.
    pub fn new(message: impl Into<String>, reason: RejectReason) -> Self {
        Self {
            message: message.into(),
            reason,
        }
    }
}

/// Destination for advisories.
///
/// Implementations must return promptly: `notify` runs on the plane-detection
/// thread. Closures `Fn(Advisory)` implement this trait directly.
pub trait AdvisorySink: Send + Sync {
    /// Delivers `advisory`, or drops it if delivery is impossible.
    fn notify(&self, advisory: Advisory);
}

impl<F> AdvisorySink for F
where
    F: Fn(Advisory) + Send + Sync,
{
    fn notify(&self, advisory: Advisory) {
        self(advisory)
    }
}

/// Discards every advisory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AdvisorySink for NullSink {
    fn notify(&self, _advisory: Advisory) {}
}

/// Forwards advisories over an unbounded channel to the interaction context.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: UnboundedSender<Advisory>,
}

impl ChannelSink {
    /// Creates a sink and the receiver the UI side should drain.
    pub fn new() -> (Self, UnboundedReceiver<Advisory>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// True once the receiver has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl AdvisorySink for ChannelSink {
    fn notify(&self, advisory: Advisory) {
        if let Err(err) = self.sender.send(advisory) {
            debug!(advisory = %err.0.message, "Advisory dropped, receiver closed");
        }
    }
}
