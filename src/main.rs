// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use fib_bench::{BenchError, Fibonacci, Runner};
use tracing_subscriber::EnvFilter;

// The canonical benchmark input
const N: u64 = 40;

fn main() -> Result<(), BenchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let report = Runner::default().run(&Fibonacci, N)?;
    println!("{}", report);

    Ok(())
}
