use std::time::{Duration, Instant};

/// Wall-clock limit captured once per region and polled by the solvers
///
/// Checking the deadline is the only cancellation point of a search.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// Deadline `budget` from now; budgets too large to represent never expire
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(budget),
        }
    }

    /// Deadline that never expires
    pub const fn unbounded() -> Self {
        Self { expires_at: None }
    }

    /// Whether the budget has been used up
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}
