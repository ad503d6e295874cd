//! Generator configuration.
//!
//! Every knob of the pipeline lives here so callers can tune it without
//! touching code. All fields have defaults, so a partial document
//! deserializes into a usable configuration.
//!
//! # Example
//!
//! ```
//! use u_gantt::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::default()
//!     .with_tracks(3)
//!     .with_overlap_trials(0)
//!     .with_seed(7);
//! assert_eq!(config.tracks, 3);
//! assert_eq!(config.max_overlap, 96);
//! ```

use serde::{Deserialize, Serialize};

/// Bar widths used when no duration set is given. Distinct primes keep
/// neighbouring bars visually distinguishable.
pub const DEFAULT_DURATIONS: [i64; 9] = [53, 59, 61, 67, 71, 73, 79, 83, 89];

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of parallel tracks (`L`).
    pub tracks: usize,
    /// Operations every track gets before the random share is added.
    pub min_operations: usize,
    /// Upper bound (inclusive) of the random total split across tracks.
    pub extra_operations_max: usize,
    /// Smallest gap inserted before each interval.
    pub spacing_min: i64,
    /// Largest gap inserted before each interval (inclusive).
    pub spacing_max: i64,
    /// Interval durations, drawn uniformly.
    pub durations: Vec<i64>,
    /// Number of overlap induction attempts (`T`).
    pub overlap_trials: usize,
    /// Exclusive upper bound on an induced shared window (`B`).
    pub max_overlap: i64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tracks: 5,
            min_operations: 6,
            extra_operations_max: 6,
            spacing_min: 0,
            spacing_max: 12,
            durations: DEFAULT_DURATIONS.to_vec(),
            overlap_trials: 10,
            max_overlap: 96,
            seed: 0,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of tracks.
    pub fn with_tracks(mut self, tracks: usize) -> Self {
        self.tracks = tracks;
        self
    }

    /// Sets the per-track minimum operation count.
    pub fn with_min_operations(mut self, min_operations: usize) -> Self {
        self.min_operations = min_operations;
        self
    }

    /// Sets the bound of the random extra operation total.
    pub fn with_extra_operations_max(mut self, extra_operations_max: usize) -> Self {
        self.extra_operations_max = extra_operations_max;
        self
    }

    /// Sets the inclusive spacing range.
    pub fn with_spacing(mut self, min: i64, max: i64) -> Self {
        self.spacing_min = min;
        self.spacing_max = max;
        self
    }

    /// Sets the duration set.
    pub fn with_durations(mut self, durations: Vec<i64>) -> Self {
        self.durations = durations;
        self
    }

    /// Sets the overlap trial budget.
    pub fn with_overlap_trials(mut self, overlap_trials: usize) -> Self {
        self.overlap_trials = overlap_trials;
        self
    }

    /// Sets the exclusive overlap bound.
    pub fn with_max_overlap(mut self, max_overlap: i64) -> Self {
        self.max_overlap = max_overlap;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let c = GeneratorConfig::default();
        assert_eq!(c.tracks, 5);
        assert_eq!(c.min_operations, 6);
        assert_eq!(c.extra_operations_max, 6);
        assert_eq!((c.spacing_min, c.spacing_max), (0, 12));
        assert_eq!(c.durations, DEFAULT_DURATIONS.to_vec());
        assert_eq!(c.overlap_trials, 10);
        assert_eq!(c.max_overlap, 96);
    }

    #[test]
    fn test_builder_chain() {
        let c = GeneratorConfig::new()
            .with_tracks(2)
            .with_min_operations(1)
            .with_extra_operations_max(0)
            .with_spacing(1, 3)
            .with_durations(vec![10, 20])
            .with_overlap_trials(4)
            .with_max_overlap(15)
            .with_seed(99);
        assert_eq!(c.tracks, 2);
        assert_eq!(c.min_operations, 1);
        assert_eq!(c.extra_operations_max, 0);
        assert_eq!((c.spacing_min, c.spacing_max), (1, 3));
        assert_eq!(c.durations, vec![10, 20]);
        assert_eq!(c.overlap_trials, 4);
        assert_eq!(c.max_overlap, 15);
        assert_eq!(c.seed, 99);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: GeneratorConfig = serde_json::from_str(r#"{"tracks": 8, "seed": 3}"#).unwrap();
        assert_eq!(c.tracks, 8);
        assert_eq!(c.seed, 3);
        assert_eq!(c.max_overlap, 96);
        assert_eq!(c.durations.len(), 9);
    }

    #[test]
    fn test_negative_track_count_fails_to_parse() {
        assert!(serde_json::from_str::<GeneratorConfig>(r#"{"tracks": -1}"#).is_err());
    }
}
