//! Aggregated autoplay results.

use crate::core::constants::PHYSICS_TICK_MS;
use crate::core::difficulty::Difficulty;

/// Outcome of a single autoplay run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub score: u32,
    /// Physics steps survived (16 ms each).
    pub steps: u64,
    pub flaps: u64,
    pub final_difficulty: Difficulty,
    /// False when the run hit the step cap instead of a game over.
    pub crashed: bool,
}

/// Aggregates over a whole batch.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub crashes: u32,
    pub cutoffs: u32,

    pub avg_score: f64,
    pub median_score: u32,
    pub max_score: u32,

    pub avg_steps: f64,
    pub avg_survival_secs: f64,
    pub avg_flaps_per_sec: f64,

    /// Runs that ended on each difficulty, indexed Easy/Normal/Hard.
    pub difficulty_counts: [u32; 3],

    /// Individual run stats for detailed analysis.
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Build the report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let crashes = runs.iter().filter(|r| r.crashed).count() as u32;
        let cutoffs = num_runs - crashes;

        let denom = num_runs.max(1) as f64;
        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / denom;
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let median_score = {
            let mut sorted: Vec<u32> = runs.iter().map(|r| r.score).collect();
            sorted.sort_unstable();
            sorted.get(sorted.len() / 2).copied().unwrap_or(0)
        };

        let avg_steps = runs.iter().map(|r| r.steps as f64).sum::<f64>() / denom;
        let avg_survival_secs = avg_steps * PHYSICS_TICK_MS as f64 / 1000.0;

        let total_secs =
            runs.iter().map(|r| r.steps as f64).sum::<f64>() * PHYSICS_TICK_MS as f64 / 1000.0;
        let total_flaps: f64 = runs.iter().map(|r| r.flaps as f64).sum();
        let avg_flaps_per_sec = if total_secs > 0.0 {
            total_flaps / total_secs
        } else {
            0.0
        };

        let mut difficulty_counts = [0u32; 3];
        for run in &runs {
            difficulty_counts[run.final_difficulty as usize] += 1;
        }

        Self {
            num_runs,
            crashes,
            cutoffs,
            avg_score,
            median_score,
            max_score,
            avg_steps,
            avg_survival_secs,
            avg_flaps_per_sec,
            difficulty_counts,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════\n");
        report.push_str("                    AUTOPLAY REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} cut off at the step cap\n\n",
            self.num_runs, self.crashes, self.cutoffs
        ));

        report.push_str("── SCORE ──────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg:    {:.1}\n", self.avg_score));
        report.push_str(&format!("  Median: {}\n", self.median_score));
        report.push_str(&format!("  Max:    {}\n\n", self.max_score));

        report.push_str("── SURVIVAL ───────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Steps:  {:.0}\n", self.avg_steps));
        report.push_str(&format!("  Avg Time:   {:.1}s\n", self.avg_survival_secs));
        report.push_str(&format!("  Flap Rate:  {:.1}/s\n\n", self.avg_flaps_per_sec));

        report.push_str("── DIFFICULTY REACHED ─────────────────────────────────\n");
        for difficulty in Difficulty::ALL {
            let count = self.difficulty_counts[difficulty as usize];
            let pct = (count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar_len = (pct / 5.0) as usize;
            report.push_str(&format!(
                "  {:<6} {:>5.1}% {}\n",
                difficulty.name(),
                pct,
                "█".repeat(bar_len)
            ));
        }
        report.push('\n');

        report.push_str("── ASSESSMENT ─────────────────────────────────────────\n");
        let rating = if self.avg_score < 5.0 {
            "BRUTAL - most runs end inside the Easy band"
        } else if self.avg_score < 20.0 {
            "EXPECTED - the difficulty ramp ends most runs"
        } else {
            "FORGIVING - scripted play routinely reaches Hard"
        };
        report.push_str(&format!("  Rating: {}\n", rating));

        if self.cutoffs > 0 {
            report.push_str(&format!(
                "  ⚠️  {} runs hit the step cap - raise --max-steps for full curves\n",
                self.cutoffs
            ));
        }
        if self.crashes == self.num_runs && self.num_runs > 0 && self.avg_survival_secs < 5.0 {
            report.push_str("  ⚠️  Every run dies almost immediately - placement ranges suspect?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Aggregate fields only; per-run stats stay out of the JSON output.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 11)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("crashes", &self.crashes)?;
        state.serialize_field("cutoffs", &self.cutoffs)?;
        state.serialize_field("avg_score", &self.avg_score)?;
        state.serialize_field("median_score", &self.median_score)?;
        state.serialize_field("max_score", &self.max_score)?;
        state.serialize_field("avg_steps", &self.avg_steps)?;
        state.serialize_field("avg_survival_secs", &self.avg_survival_secs)?;
        state.serialize_field("avg_flaps_per_sec", &self.avg_flaps_per_sec)?;
        state.serialize_field("difficulty_counts", &self.difficulty_counts)?;
        state.serialize_field(
            "crash_rate",
            &((self.crashes as f64 / self.num_runs.max(1) as f64) * 100.0),
        )?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, steps: u64, crashed: bool, difficulty: Difficulty) -> RunStats {
        RunStats {
            score,
            steps,
            flaps: steps / 20,
            final_difficulty: difficulty,
            crashed,
        }
    }

    #[test]
    fn test_report_aggregates_scores_and_outcomes() {
        let runs = vec![
            run(4, 1_000, true, Difficulty::Easy),
            run(12, 3_000, true, Difficulty::Normal),
            run(26, 8_000, false, Difficulty::Hard),
        ];

        let report = SimReport::from_runs(runs);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.crashes, 2);
        assert_eq!(report.cutoffs, 1);
        assert_eq!(report.max_score, 26);
        assert_eq!(report.median_score, 12);
        assert!((report.avg_score - 14.0).abs() < 1e-9);
        assert_eq!(report.difficulty_counts, [1, 1, 1]);
    }

    #[test]
    fn test_empty_batch_produces_a_zeroed_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.max_score, 0);
        assert_eq!(report.median_score, 0);
        assert_eq!(report.avg_flaps_per_sec, 0.0);
    }

    #[test]
    fn test_text_report_includes_every_section() {
        let report = SimReport::from_runs(vec![run(8, 2_000, true, Difficulty::Easy)]);
        let text = report.to_text();
        assert!(text.contains("AUTOPLAY REPORT"));
        assert!(text.contains("── SCORE"));
        assert!(text.contains("── SURVIVAL"));
        assert!(text.contains("── DIFFICULTY REACHED"));
        assert!(text.contains("── ASSESSMENT"));
    }

    #[test]
    fn test_json_report_skips_per_run_stats() {
        let report = SimReport::from_runs(vec![run(3, 500, true, Difficulty::Easy)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
        assert_eq!(value["max_score"], 3);
        assert!(value.get("run_stats").is_none());
    }
}
