// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

// Elapsed time is measured with `Instant`, which is monotonic: two
// successive `elapsed` reads never decrease, regardless of wall-clock
// adjustments.

use std::time::{Duration, Instant};

/// Type alias for elapsed wall-clock seconds
pub type Seconds = f64;

#[derive(Debug, Clone, Copy)]
/// Struct to keep track of elapsed wall-clock time
pub struct Stopwatch {
    /// Monotonic timestamp taken when the stopwatch was started.
    started: Instant,
}

impl Stopwatch {
    /// Starts a new `Stopwatch` at the current instant.
    pub fn start() -> Stopwatch {
        Stopwatch {
            started: Instant::now(),
        }
    }

    /// Returns the time elapsed since start.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Returns the time elapsed since start, in seconds.
    pub fn elapsed_seconds(&self) -> Seconds {
        self.elapsed().as_secs_f64()
    }
}
