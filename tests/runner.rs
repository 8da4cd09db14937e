// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::cell::Cell;
use std::time::Duration;

use fib_bench::{BenchError, Fibonacci, Runner, Workload};

fn time_fibonacci(n: u64) -> Duration {
    let report = Runner::new(3).run(&Fibonacci, n).expect("Benchmark error");

    report.measurement().fastest().expect("At least one sample")
}

#[test]
fn report_carries_value_and_time() {
    let report =
        Runner::default().run(&Fibonacci, 10).expect("Benchmark error");

    assert_eq!(report.workload(), "fib");
    assert_eq!(report.n(), 10);
    assert_eq!(report.value(), 55);
    assert_eq!(report.measurement().len(), 1);
    assert!(report.elapsed_seconds() >= 0.0);
    assert!(report.elapsed_seconds().is_finite());
}

#[test]
fn report_line_format() {
    let report =
        Runner::default().run(&Fibonacci, 10).expect("Benchmark error");

    let line = report.to_string();
    assert!(line.starts_with("fib(10): 55, time: "), "got: {}", line);
    assert!(line.ends_with(" seconds"), "got: {}", line);
}

#[test]
fn report_writes_line() {
    let report =
        Runner::default().run(&Fibonacci, 10).expect("Benchmark error");

    let mut out = Vec::new();
    report.write_to(&mut out).expect("Write error");

    let line = String::from_utf8(out).expect("Valid UTF-8");
    assert_eq!(line, format!("{}\n", report));
}

#[test]
fn zero_samples_is_an_error() {
    let err = Runner::new(0).run(&Fibonacci, 10).unwrap_err();
    assert!(matches!(err, BenchError::EmptySampleSet));
}

#[test]
fn runner_records_every_sample() {
    let report = Runner::new(5).run(&Fibonacci, 15).expect("Benchmark error");

    let measurement = report.measurement();
    assert_eq!(measurement.len(), 5);

    let fastest = measurement.fastest().expect("At least one sample");
    let slowest = measurement.slowest().expect("At least one sample");
    let mean = measurement.mean().expect("At least one sample");
    assert!(fastest <= mean);
    assert!(mean <= slowest);
    assert_eq!(
        measurement.total(),
        measurement.samples().iter().sum::<Duration>()
    );
}

// A workload with hidden state: returns a different value on every call
struct Drifting(Cell<u64>);

impl Workload for Drifting {
    fn name(&self) -> &'static str {
        "drifting"
    }

    fn compute(&self, n: u64) -> u64 {
        let drift = self.0.get();
        self.0.set(drift + 1);
        n + drift
    }
}

#[test]
fn hidden_state_is_detected() {
    let err = Runner::new(2)
        .run(&Drifting(Cell::new(0)), 7)
        .unwrap_err();

    assert!(matches!(
        err,
        BenchError::NondeterministicWorkload("drifting", 7, 8)
    ));
}

#[test]
fn elapsed_grows_with_input() {
    let fib_20 = time_fibonacci(20);
    let fib_30 = time_fibonacci(30);

    // ~120x more calls at n = 30; scheduling noise cannot invert that
    assert!(
        fib_30 > fib_20,
        "fib(30) took {:?}, fib(20) took {:?}",
        fib_30,
        fib_20
    );
}

#[test]
#[ignore = "fib(40) takes minutes without optimizations"]
fn elapsed_grows_from_30_to_40() {
    let fib_30 = time_fibonacci(30);
    let fib_40 = time_fibonacci(40);

    assert!(
        fib_40 > fib_30 * 10,
        "fib(40) took {:?}, fib(30) took {:?}",
        fib_40,
        fib_30
    );
}
