//! Configuration types for the crunch engine and combo detector.

use serde::{Deserialize, Serialize};

/// Configuration for a crunch run's work distribution and progress reporting.
///
/// Does not carry the analysis function itself (that lives on
/// [`crate::engine::CrunchParams`], which is generic over its result type and
/// therefore cannot derive `Serialize`/`Deserialize`). This type holds the
/// plain-data knobs that *are* safe to persist or load from a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrunchConfig {
    /// Descend into subdirectories during scanning.
    pub recursive: bool,
    /// Desired worker count; clamped to `[1, hardware_concurrency]` at run time.
    pub desired_worker_count: usize,
    /// Milliseconds between progress-callback polls.
    pub progress_report_interval_ms: u64,
}

impl Default for CrunchConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            desired_worker_count: default_worker_count(),
            progress_report_interval_ms: 50,
        }
    }
}

impl CrunchConfig {
    /// Create a config with a fixed worker count, recursive scanning.
    pub fn with_workers(worker_count: usize) -> Self {
        Self {
            desired_worker_count: worker_count,
            ..Default::default()
        }
    }

    /// Serialize to a JSON string, for persisting alongside a crunch run.
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::CrunchError::Config(e.to_string()))
    }

    /// Parse a config previously produced by [`Self::to_json`].
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::error::CrunchError::Config(e.to_string()))
    }

    /// Clamp `desired_worker_count` into `[1, hardware_concurrency]`, warning if
    /// the requested count was out of range.
    pub fn validate(&self) -> Self {
        let hw = num_cpus::get().max(1);
        let clamped = self.desired_worker_count.clamp(1, hw);
        if clamped != self.desired_worker_count {
            log::warn!(
                "desired_worker_count {} out of range [1, {}], clamped to {}",
                self.desired_worker_count,
                hw,
                clamped
            );
        }
        Self {
            desired_worker_count: clamped,
            ..self.clone()
        }
    }
}

/// Default worker count: leaves one core for the driver thread.
fn default_worker_count() -> usize {
    num_cpus::get().saturating_sub(1).max(1)
}

/// Configuration for the combo detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboDetectorConfig {
    /// Tag code identifying "our" player for port selection (see the
    /// original tool's hard-coded `"YOYO#278"` literal, now configurable).
    pub player_identity_tag: String,
    /// Frames of padding added before the punish's start frame.
    pub intro_frames: i32,
    /// Frames of padding added after the punish's end frame.
    pub outro_frames: i32,
}

impl Default for ComboDetectorConfig {
    fn default() -> Self {
        Self {
            player_identity_tag: "YOYO#278".to_string(),
            intro_frames: 60,
            outro_frames: 60,
        }
    }
}

impl ComboDetectorConfig {
    /// Create a config with a custom identity tag, default padding.
    pub fn with_identity_tag(tag: impl Into<String>) -> Self {
        Self {
            player_identity_tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set intro/outro padding, consuming builder style.
    pub fn padding(mut self, intro_frames: i32, outro_frames: i32) -> Self {
        self.intro_frames = intro_frames;
        self.outro_frames = outro_frames;
        self
    }
}

/// Configuration for the JSON serializer's output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializerConfig {
    /// Value of the top-level `"replay"` field (empty string in the original tool).
    pub replay: String,
    /// Value of the top-level `"isRealTimeMode"` field.
    pub is_real_time_mode: bool,
    /// Value of the top-level `"outputOverlayFiles"` field.
    pub output_overlay_files: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            replay: String::new(),
            is_real_time_mode: false,
            output_overlay_files: true,
        }
    }
}
