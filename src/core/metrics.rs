//! Logger metrics for observability
//!
//! Counters for what the logger did with each call: written, suppressed by
//! the verbosity ceiling, or dropped because a sink failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_dual_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_console();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.console_lines(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines written to the console sink
    console_lines: AtomicU64,

    /// Lines appended to the log file
    file_lines: AtomicU64,

    /// Console calls rejected by the verbosity ceiling
    suppressed: AtomicU64,

    /// Records lost to a sink error
    dropped_count: AtomicU64,

    /// Daily file rotations performed
    rotations: AtomicU64,

    /// Inline redraws that used the fallback width
    width_fallbacks: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            console_lines: AtomicU64::new(0),
            file_lines: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
            width_fallbacks: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn console_lines(&self) -> u64 {
        self.console_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_lines(&self) -> u64 {
        self.file_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn width_fallbacks(&self) -> u64 {
        self.width_fallbacks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_console(&self) -> u64 {
        self.console_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file(&self) -> u64 {
        self.file_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped record (returns the previous count)
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rotation(&self) -> u64 {
        self.rotations.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_width_fallback(&self) -> u64 {
        self.width_fallbacks.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.console_lines(), 0);
        assert_eq!(metrics.file_lines(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.rotations(), 0);
        assert_eq!(metrics.width_fallbacks(), 0);
    }

    #[test]
    fn test_metrics_record_dropped() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_dropped(), 0); // Returns previous value
        assert_eq!(metrics.dropped_count(), 1);
        metrics.record_dropped();
        assert_eq!(metrics.dropped_count(), 2);
    }

    #[test]
    fn test_metrics_counters_are_independent() {
        let metrics = LoggerMetrics::new();
        metrics.record_console();
        metrics.record_file();
        metrics.record_file();
        metrics.record_suppressed();
        metrics.record_rotation();
        metrics.record_width_fallback();

        assert_eq!(metrics.console_lines(), 1);
        assert_eq!(metrics.file_lines(), 2);
        assert_eq!(metrics.suppressed_count(), 1);
        assert_eq!(metrics.dropped_count(), 0);
        assert_eq!(metrics.rotations(), 1);
        assert_eq!(metrics.width_fallbacks(), 1);
    }
}
