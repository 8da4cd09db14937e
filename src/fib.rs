// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The naive recursive Fibonacci workload.

use crate::runner::Workload;

/// Computes the n-th Fibonacci number by naive double recursion.
///
/// No memoization: every overlapping subproblem is recomputed, giving
/// exponential time (≈ O(φ^n)) and recursion depth `n`. `fib(n)` exceeds
/// `u64::MAX` from `n = 94`, far beyond what the recursion can reach in
/// practical time.
pub fn fib(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    fib(n - 2) + fib(n - 1)
}

/// Workload descriptor for [`fib`]
#[derive(Debug, Clone, Default)]
pub struct Fibonacci;

impl Workload for Fibonacci {
    fn name(&self) -> &'static str {
        "fib"
    }

    fn compute(&self, n: u64) -> u64 {
        fib(n)
    }
}
