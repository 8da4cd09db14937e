// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::time::Duration;

/// A set of timed samples collected from repeated runs of a workload.
///
/// Samples are kept in recording order.
#[derive(Debug, Clone, Default)]
pub struct Measurement {
    samples: Vec<Duration>,
}

impl Measurement {
    /// Creates a new, empty `Measurement`
    pub fn new() -> Measurement {
        Measurement {
            samples: Vec::new(),
        }
    }

    /// Appends one elapsed-time sample
    pub fn record(&mut self, elapsed: Duration) {
        self.samples.push(elapsed);
    }

    /// Returns the number of recorded samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no sample has been recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the recorded samples, in recording order
    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    /// Returns the sum of all samples
    pub fn total(&self) -> Duration {
        self.samples.iter().sum()
    }

    /// Returns the shortest sample, or `None` if empty
    pub fn fastest(&self) -> Option<Duration> {
        self.samples.iter().min().copied()
    }

    /// Returns the longest sample, or `None` if empty
    pub fn slowest(&self) -> Option<Duration> {
        self.samples.iter().max().copied()
    }

    /// Returns the mean sample, or `None` if empty
    pub fn mean(&self) -> Option<Duration> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.total() / self.samples.len() as u32)
    }
}
