//! Small helpers shared by the color picker crates: timing logs, failure reporting and
//! the config directory.

pub mod directories;
pub mod failure;

use core::time::Duration;
use std::time::Instant;

use tracing::debug;

/// Display the duration as a string with units.
/// 1. `>= 1s` displays seconds with 2dp.
/// 1. `>= 1ms` displays milliseconds with 1dp.
/// 1. `>= 1µs` displays microseconds only.
/// 1. `< 1µs` displays nanoseconds only.
#[inline]
pub fn display_duration(duration: Duration) -> String {
    if duration.as_secs() >= 1 {
        format!("{:.2}s", duration.as_secs_f64())
    } else if duration.as_millis() >= 1 {
        format!("{:.1}ms", duration.as_secs_f64() * 1_000.0)
    } else if duration.as_micros() >= 1 {
        format!("{}µs", duration.as_micros())
    } else {
        format!("{}ns", duration.as_nanos())
    }
}

/// Logs the time since construction when dropped.
pub struct DebugTime {
    label: &'static str,
    start: Instant,
}

impl DebugTime {
    /// Start a timer, logged as `[Timing] {label} took {duration}`.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for DebugTime {
    fn drop(&mut self) {
        debug!(
            "[Timing] {} took {}",
            self.label,
            display_duration(self.start.elapsed())
        );
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::display_duration;

    #[test]
    fn duration_units() {
        assert_eq!(display_duration(Duration::from_millis(2_500)), "2.50s");
        assert_eq!(display_duration(Duration::from_micros(12_300)), "12.3ms");
        assert_eq!(display_duration(Duration::from_micros(450)), "450µs");
        assert_eq!(display_duration(Duration::from_nanos(12)), "12ns");
    }
}
