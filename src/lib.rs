// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! #Fib-Bench
//!
//! Benchmark harness timing the naive recursive Fibonacci workload
#![warn(missing_docs)]

mod error;
mod fib;
mod measurement;
mod report;
mod runner;
mod stopwatch;

pub use error::BenchError;
pub use fib::{fib, Fibonacci};
pub use measurement::Measurement;
pub use report::Report;
pub use runner::{Runner, Workload};
pub use stopwatch::{Seconds, Stopwatch};
