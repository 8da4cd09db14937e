// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use tracing::{trace, trace_span};

use crate::measurement::Measurement;
use crate::report::Report;
use crate::stopwatch::Stopwatch;
use crate::BenchError;

/// A named, pure, CPU-bound computation that can be benchmarked.
pub trait Workload {
    /// Short name used in report lines and trace spans
    fn name(&self) -> &'static str;

    /// Computes the workload result for input `n`
    fn compute(&self, n: u64) -> u64;
}

/// Executes a workload under a stopwatch, one or more samples at a time.
///
/// Execution is single-threaded and synchronous. The workload runs on the
/// caller's stack, so a deeply recursive workload at very large inputs can
/// exhaust it; that aborts the process and is not handled here.
#[derive(Debug, Clone)]
pub struct Runner {
    samples: u32,
}

impl Runner {
    /// Number of samples taken by [`Runner::default`]. The canonical run
    /// times exactly one call.
    pub const DEFAULT_SAMPLES: u32 = 1;

    /// Creates a new `Runner` taking `samples` timed samples per run
    pub fn new(samples: u32) -> Runner {
        Runner { samples }
    }

    /// Returns how many samples each run collects
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Runs `workload` at input `n`, timing each sample.
    ///
    /// A pure workload must return the same value on every sample; a
    /// disagreement means hidden state and fails the run.
    pub fn run<W: Workload>(
        &self,
        workload: &W,
        n: u64,
    ) -> Result<Report, BenchError> {
        if self.samples == 0 {
            return Err(BenchError::EmptySampleSet);
        }

        let _span = trace_span!(
            "run",
            workload = workload.name(),
            n,
            samples = self.samples
        );

        let mut measurement = Measurement::new();
        let mut value: Option<u64> = None;

        for sample in 0..self.samples {
            let stopwatch = Stopwatch::start();
            let computed = workload.compute(n);
            let elapsed = stopwatch.elapsed();
            measurement.record(elapsed);

            trace!(sample, ?elapsed, computed, "sample finished");

            match value {
                None => value = Some(computed),
                Some(first) if first != computed => {
                    return Err(BenchError::NondeterministicWorkload(
                        workload.name(),
                        first,
                        computed,
                    ));
                }
                Some(_) => (),
            }
        }

        let value = value.ok_or(BenchError::EmptySampleSet)?;

        Ok(Report::new(workload.name(), n, value, measurement))
    }
}

impl Default for Runner {
    fn default() -> Self {
        Runner::new(Self::DEFAULT_SAMPLES)
    }
}
