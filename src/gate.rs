// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed-window admission gate.
//!
//! The gate admits at most `request_limit` callers per window:
//!
//! - [`AdmissionGate::acquire`] blocks while no capacity is available
//! - Dropping the returned [`AdmissionPermit`] returns the slot, capped at
//!   `request_limit`
//! - A background task restores capacity to full once per window
//!
//! Known limitation: replenishment resets availability to full without
//! reconciling slots still held by in-flight callers, so a burst that
//! straddles a window boundary can put up to twice the limit in flight at
//! once. The guarantee is "no more than `request_limit` admissions *begin*
//! inside one window", not a sliding cap on concurrent work.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

/// State shared between the gate, its permits, and the replenish task.
struct Shared {
    /// Full capacity per window.
    limit: usize,
    /// Available admission slots; permit count stays in `[0, limit]`.
    permits: Semaphore,
    /// Serializes credit operations (release, replenish) so concurrent
    /// credits can never push availability above `limit`. Acquires do not
    /// take this lock.
    credit: Mutex<()>,
}

impl Shared {
    /// Return one slot, capped at full capacity.
    ///
    /// The cap matters after a replenish: a slot handed out in the previous
    /// window comes back when the pool is already full and must be dropped
    /// on the floor rather than credited.
    fn release_one(&self) {
        let _guard = self.credit.lock().expect("gate credit lock poisoned");
        if self.permits.available_permits() < self.limit {
            self.permits.add_permits(1);
        } else {
            trace!("release at full capacity, slot discarded");
        }
    }

    /// Restore availability to exactly `limit`.
    ///
    /// Expressed as a deficit credit rather than a reset so it composes
    /// with concurrent `release_one` calls: both paths only ever add
    /// permits under the credit lock, bounded by the observed deficit, and
    /// concurrent acquires can only shrink availability in the meantime.
    fn replenish(&self) {
        let _guard = self.credit.lock().expect("gate credit lock poisoned");
        let deficit = self.limit.saturating_sub(self.permits.available_permits());
        if deficit > 0 {
            self.permits.add_permits(deficit);
            debug!(credited = deficit, "admission window replenished");
        }
    }
}

/// Fixed-window admission gate.
///
/// Owns the capacity pool and the replenish timer. Share it between tasks
/// behind an `Arc`; dropping the last handle stops the timer.
pub struct AdmissionGate {
    shared: Arc<Shared>,
    replenisher: JoinHandle<()>,
}

impl AdmissionGate {
    /// Create a gate admitting `request_limit` callers per `window`.
    ///
    /// Spawns the replenish task, so this must be called inside a tokio
    /// runtime. `request_limit` must be at least 1; a zero limit blocks
    /// every acquire until the first replenish, which credits nothing.
    pub fn new(window: Duration, request_limit: u32) -> Self {
        let shared = Arc::new(Shared {
            limit: request_limit as usize,
            permits: Semaphore::new(request_limit as usize),
            credit: Mutex::new(()),
        });

        // The task holds only a weak reference so the gate's drop is not
        // kept alive by its own timer. The interval is created here, not in
        // the task, so the window is anchored at gate creation rather than
        // at the task's first poll.
        let weak = Arc::downgrade(&shared);
        let mut interval = tokio::time::interval(window);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The pool starts full, so skip interval's immediate first tick by
        // resetting the next deadline to one window from now.
        interval.reset();
        let replenisher = tokio::spawn(replenish_loop(weak, interval));

        Self { shared, replenisher }
    }

    /// Acquire one admission slot, waiting while none are available.
    ///
    /// Resumes as soon as a release or a replenish makes capacity
    /// available; no fairness order is guaranteed between waiters. Dropping
    /// the future while it is still waiting consumes nothing.
    pub async fn acquire(&self) -> AdmissionPermit {
        let permit = self
            .shared
            .permits
            .acquire()
            .await
            // The semaphore is never closed for the life of the gate.
            .expect("admission semaphore closed");

        // Slot accounting is done by AdmissionPermit so the return path can
        // cap at the limit; the raw semaphore permit must not also credit
        // one back on drop.
        permit.forget();
        debug!(
            available = self.shared.permits.available_permits(),
            "admission granted"
        );

        AdmissionPermit {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Currently available admission slots.
    pub fn available(&self) -> usize {
        self.shared.permits.available_permits()
    }

    /// Full capacity per window.
    pub fn request_limit(&self) -> usize {
        self.shared.limit
    }
}

impl Drop for AdmissionGate {
    fn drop(&mut self) {
        self.replenisher.abort();
    }
}

impl std::fmt::Debug for AdmissionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionGate")
            .field("limit", &self.shared.limit)
            .field("available", &self.shared.permits.available_permits())
            .finish()
    }
}

/// One admission slot, returned to the gate on drop.
///
/// Drop-based release guarantees that every successful acquire is matched
/// by exactly one release on every exit path, including early returns and
/// panics in the admitted section.
#[must_use = "dropping the permit immediately returns the admission slot"]
pub struct AdmissionPermit {
    shared: Arc<Shared>,
}

impl Drop for AdmissionPermit {
    fn drop(&mut self) {
        self.shared.release_one();
    }
}

impl std::fmt::Debug for AdmissionPermit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionPermit").finish()
    }
}

/// Fire a replenish once per window until the gate is gone.
async fn replenish_loop(shared: Weak<Shared>, mut interval: tokio::time::Interval) {
    loop {
        interval.tick().await;
        let Some(shared) = shared.upgrade() else {
            break;
        };
        shared.replenish();
    }
}
