//! Progress reporting and cooperative cancellation.
//!
//! A `remesh` call is a potentially long-running unit of work with no
//! internal suspension points. Callers embedding the engine in an
//! interactive application can pass a [`ProgressCallback`]; it is invoked
//! once per completed iteration and may request cancellation by returning
//! `false`. Cancellation is cooperative: the in-flight iteration always
//! runs to completion, the driver then stops and returns the work done so
//! far.
//!
//! # Example
//!
//! ```ignore
//! use mesh_remesh::{ProgressCallback, RemeshParams, remesh_isotropic_with_progress};
//!
//! let callback: ProgressCallback = Box::new(|progress| {
//!     println!("{}%: {}", progress.percent(), progress.message);
//!     true // return false to cancel
//! });
//!
//! let result = remesh_isotropic_with_progress(&mesh, &params, Some(&callback))?;
//! ```

use std::time::Duration;

/// Progress information passed to callbacks.
#[derive(Debug, Clone)]
pub struct Progress {
    /// Current step (0-based).
    pub current: u64,

    /// Total number of steps.
    pub total: u64,

    /// Human-readable message describing current operation.
    pub message: String,

    /// Elapsed time since operation started.
    pub elapsed: Duration,
}

impl Progress {
    /// Create a new progress report.
    pub fn new(current: u64, total: u64, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
            elapsed: Duration::ZERO,
        }
    }

    /// Attach elapsed time.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Get progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64) / (self.total as f64)
        }
    }

    /// Get progress as a percentage (0 to 100).
    #[inline]
    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }

    /// Check if the operation is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.current >= self.total
    }
}

/// Callback function for progress reporting.
///
/// Returns `true` to continue, `false` to request cancellation.
pub type ProgressCallback = Box<dyn Fn(&Progress) -> bool + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_fraction() {
        let progress = Progress::new(1, 4, "iteration");
        assert!((progress.fraction() - 0.25).abs() < 1e-12);
        assert_eq!(progress.percent(), 25);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_complete() {
        let progress = Progress::new(3, 3, "done");
        assert!(progress.is_complete());
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_zero_total_does_not_divide_by_zero() {
        let progress = Progress::new(0, 0, "empty");
        assert_eq!(progress.fraction(), 0.0);
    }
}
