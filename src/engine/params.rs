//! Crunch run parameters.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CrunchError, Result};
use crate::replay::ReplayParser;

/// Parameters for one crunch run, generic over the per-file result type `R`
/// the caller's analysis function produces.
///
/// Built with a consuming builder: every setter takes `self` by value and
/// returns `Self`.
pub struct CrunchParams<P, R>
where
    P: ReplayParser,
    R: Send + 'static,
{
    crunch_func: Option<Arc<dyn Fn(P) -> R + Send + Sync>>,
    progress_report_func: Option<Arc<dyn Fn(usize, usize) + Send + Sync>>,
    progress_report_interval: Duration,
    desired_worker_count: usize,
}

impl<P, R> Default for CrunchParams<P, R>
where
    P: ReplayParser,
    R: Send + 'static,
{
    fn default() -> Self {
        Self {
            crunch_func: None,
            progress_report_func: None,
            progress_report_interval: Duration::from_millis(50),
            desired_worker_count: num_cpus::get().saturating_sub(1).max(1),
        }
    }
}

impl<P, R> CrunchParams<P, R>
where
    P: ReplayParser,
    R: Send + 'static,
{
    /// Start building a new set of parameters. `crunch_func` is required;
    /// attempting to run without one is a [`CrunchError::Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-file analysis function. Required.
    pub fn crunch_func<F>(mut self, f: F) -> Self
    where
        F: Fn(P) -> R + Send + Sync + 'static,
    {
        self.crunch_func = Some(Arc::new(f));
        self
    }

    /// Set the progress callback, polled on `progress_report_interval`.
    pub fn progress_report_func<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        self.progress_report_func = Some(Arc::new(f));
        self
    }

    /// Set the interval between progress polls. Default 50ms.
    pub fn progress_report_interval(mut self, interval: Duration) -> Self {
        self.progress_report_interval = interval;
        self
    }

    /// Set the desired worker count. Clamped to `[1, hardware_concurrency]`
    /// at run time.
    pub fn desired_worker_count(mut self, count: usize) -> Self {
        self.desired_worker_count = count;
        self
    }

    pub(super) fn func(&self) -> Result<Arc<dyn Fn(P) -> R + Send + Sync>> {
        self.crunch_func
            .clone()
            .ok_or_else(|| CrunchError::Config("crunch_func is required".to_string()))
    }

    pub(super) fn progress(&self) -> Option<Arc<dyn Fn(usize, usize) + Send + Sync>> {
        self.progress_report_func.clone()
    }

    pub(super) fn interval(&self) -> Duration {
        self.progress_report_interval
    }

    pub(super) fn worker_count(&self) -> usize {
        let hw = num_cpus::get().max(1);
        self.desired_worker_count.clamp(1, hw)
    }
}
