// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use std::io;

use tracing::level_filters::LevelFilter;

// Diagnostics go to stderr so they never mix with the progress lines on stdout.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(verbosity))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
