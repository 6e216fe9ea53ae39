//! Toast notifications.
//!
//! A toast is visible for [`VISIBLE_FOR`], then plays its exit animation for
//! [`EXIT_ANIMATION`], then disappears. Time only moves when the owner calls
//! [`Notifier::tick`], which keeps the lifecycle deterministic and testable.

use serde::Deserialize;
use std::time::Duration;
use tokio::time::Instant;
use tracing::trace;

/// How long a toast stays fully visible.
pub const VISIBLE_FOR: Duration = Duration::from_millis(3000);

/// Length of the reverse slide-out before a toast is removed.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// What happens to the current toast when another one is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPolicy {
    /// The existing toast is removed before the new one appears
    #[default]
    Single,
    /// Toasts stack; each runs its own lifecycle
    Stack,
}

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Green confirmation
    Success,
    /// Red failure notice
    Error,
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully shown
    Visible,
    /// Playing the exit animation
    Leaving,
    /// Finished; removed on the next tick
    Gone,
}

/// One notification on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id, unique per notifier
    pub id: u64,
    /// Text shown to the user
    pub message: String,
    /// Success or error styling
    pub kind: ToastKind,
    /// Lifecycle phase as of the last tick
    pub phase: ToastPhase,
    shown_at: Instant,
}

impl Toast {
    /// Phase this toast is in at `now`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> ToastPhase {
        let age = now.saturating_duration_since(self.shown_at);
        if age < VISIBLE_FOR {
            ToastPhase::Visible
        } else if age < VISIBLE_FOR + EXIT_ANIMATION {
            ToastPhase::Leaving
        } else {
            ToastPhase::Gone
        }
    }
}

/// Owns the toasts currently on screen.
#[derive(Debug, Clone)]
pub struct Notifier {
    policy: ToastPolicy,
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifier {
    /// Creates an empty notifier with the given stacking policy.
    #[must_use]
    pub const fn new(policy: ToastPolicy) -> Self {
        Self {
            policy,
            toasts: Vec::new(),
            next_id: 1,
        }
    }

    /// Shows a new toast at `now` and returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> u64 {
        if self.policy == ToastPolicy::Single {
            self.toasts.clear();
        }
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        trace!(id, ?kind, %message, "Showing toast");
        self.toasts.push(Toast {
            id,
            message,
            kind,
            phase: ToastPhase::Visible,
            shown_at: now,
        });
        id
    }

    /// Advances every toast to its phase at `now` and drops finished ones.
    /// Returns true when anything on screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for toast in &mut self.toasts {
            let phase = toast.phase_at(now);
            if phase != toast.phase {
                toast.phase = phase;
                changed = true;
            }
        }
        self.toasts.retain(|t| t.phase != ToastPhase::Gone);
        changed
    }

    /// Toasts currently on screen, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
