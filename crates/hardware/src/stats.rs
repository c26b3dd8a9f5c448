//! Multiplier statistics collection and reporting.
//!
//! This module tracks activity counters for a multiplier instance. It provides:
//! 1. **Ticks:** Total ticks and ticks spent with a multiply in flight.
//! 2. **Control:** Accepted starts, starts ignored while busy, and resets.
//! 3. **Results:** Valid pulses, zero-absorbed results, and multiplies aborted by reset.

use std::time::Instant;

use serde::Serialize;

/// Activity counters for one multiplier.
#[derive(Clone, Debug, Serialize)]
pub struct MultiplierStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total ticks evaluated.
    pub ticks: u64,
    /// Ticks on which a multiply occupied the pipeline.
    pub busy_ticks: u64,
    /// Starts accepted while idle.
    pub starts_accepted: u64,
    /// Starts ignored because a multiply was in flight.
    pub starts_rejected: u64,
    /// `result_valid` pulses produced.
    pub results: u64,
    /// Results forced to zero by a zero operand.
    pub zero_results: u64,
    /// Ticks with reset asserted.
    pub resets: u64,
    /// Multiplies abandoned by a reset before completing.
    pub aborted: u64,
}

impl Default for MultiplierStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            busy_ticks: 0,
            starts_accepted: 0,
            starts_rejected: 0,
            results: 0,
            zero_results: 0,
            resets: 0,
            aborted: 0,
        }
    }
}

impl MultiplierStats {
    /// Fraction of ticks with a multiply in flight, in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.busy_ticks as f64 / self.ticks as f64
        }
    }

    /// Average ticks per completed result, or `None` before the first result.
    pub fn ticks_per_result(&self) -> Option<f64> {
        (self.results > 0).then(|| self.ticks as f64 / self.results as f64)
    }

    /// Renders the report printed by [`MultiplierStats::print`].
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let mut out = String::new();
        out.push_str("==========================================================\n");
        out.push_str("MULTIPLIER SIMULATION STATISTICS\n");
        out.push_str("==========================================================\n");
        out.push_str(&format!("host_seconds             {seconds:.4} s\n"));
        out.push_str(&format!("sim_ticks                {}\n", self.ticks));
        out.push_str(&format!("sim_results              {}\n", self.results));
        match self.ticks_per_result() {
            Some(tpr) => out.push_str(&format!("sim_ticks_per_result     {tpr:.2}\n")),
            None => out.push_str("sim_ticks_per_result     -\n"),
        }
        out.push_str("----------------------------------------------------------\n");
        out.push_str("CONTROL\n");
        out.push_str(&format!(
            "  busy_ticks             {} ({:.2}%)\n",
            self.busy_ticks,
            self.utilization() * 100.0
        ));
        out.push_str(&format!("  starts.accepted        {}\n", self.starts_accepted));
        out.push_str(&format!("  starts.rejected        {}\n", self.starts_rejected));
        out.push_str(&format!("  resets                 {}\n", self.resets));
        out.push_str(&format!("  aborted                {}\n", self.aborted));
        out.push_str(&format!("  results.zero           {}\n", self.zero_results));
        out.push_str("==========================================================\n");
        out
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        print!("{}", self.report());
    }
}
