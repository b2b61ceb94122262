//! Cosmetic delays for demo-style output.
//!
//! The scan and the assistant deliberately take a moment in demo mode so the
//! output feels like a device warming up. Tests and scripted use run with
//! [`Pacing::none`], which turns every pause into a no-op.

use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    enabled: bool,
}

impl Pacing {
    /// Environment-scan warm-up.
    pub const SCAN: Duration = Duration::from_secs(2);
    /// Assistant "thinking" pause.
    pub const PROCESSING: Duration = Duration::from_millis(1500);

    pub const fn demo() -> Self {
        Self { enabled: true }
    }

    pub const fn none() -> Self {
        Self { enabled: false }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn pause(&self, delay: Duration) {
        if self.enabled {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn disabled_pacing_returns_immediately() {
        let start = Instant::now();
        Pacing::none().pause(Duration::from_secs(5));
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
