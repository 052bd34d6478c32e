//! Simulation configuration.

/// Configuration for a batch of autoplay runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = seed from the OS)
    pub seed: Option<u64>,

    /// Maximum physics steps per run before the run is cut off
    pub max_steps_per_run: u64,

    /// Log verbosity (0 = report only, 1 = config echo, 2 = per-run lines)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 500,
            seed: None,
            max_steps_per_run: 36_000, // ~10 minutes of play at 16 ms per step
            verbosity: 1,
        }
    }
}
