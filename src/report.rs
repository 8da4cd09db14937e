// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;
use std::io;
use std::time::Duration;

use crate::measurement::Measurement;
use crate::stopwatch::Seconds;
use crate::BenchError;

/// The outcome of a benchmark run: the computed value plus its timing.
#[derive(Debug, Clone)]
pub struct Report {
    workload: &'static str,
    n: u64,
    value: u64,
    measurement: Measurement,
}

impl Report {
    /// Creates a new `Report` for `workload` run at input `n`
    pub fn new(
        workload: &'static str,
        n: u64,
        value: u64,
        measurement: Measurement,
    ) -> Report {
        Report {
            workload,
            n,
            value,
            measurement,
        }
    }

    /// Returns the workload name
    pub fn workload(&self) -> &'static str {
        self.workload
    }

    /// Returns the input the workload ran at
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Returns the computed value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the recorded samples
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Returns the mean elapsed time over the recorded samples. Equal to
    /// the only sample in the canonical single-sample run.
    pub fn elapsed(&self) -> Duration {
        self.measurement.mean().unwrap_or_default()
    }

    /// Returns the mean elapsed time, in seconds
    pub fn elapsed_seconds(&self) -> Seconds {
        self.elapsed().as_secs_f64()
    }

    /// Writes the report line, newline-terminated, into `writer`
    pub fn write_to<W: io::Write>(
        &self,
        writer: &mut W,
    ) -> Result<(), BenchError> {
        writeln!(writer, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({}): {}, time: {} seconds",
            self.workload,
            self.n,
            self.value,
            self.elapsed_seconds()
        )
    }
}
