// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
/// The errors that can happen while running a benchmark
pub enum BenchError {
    /// The requested sample set is empty
    #[error("The requested sample set is empty")]
    EmptySampleSet,
    /// A workload disagreed with itself across samples
    #[error("The workload {0} returned conflicting values: {1}, then {2}")]
    NondeterministicWorkload(&'static str, u64, u64),
    /// Input / Output error
    #[error("Input / Output error")]
    IOError(#[from] io::Error),
}
