//! Example showing a bar completing, then a bar being interrupted half way.
//!
//! Run with `RUST_LOG=smooth_progress=debug` to see the lifecycle events.

use color_eyre::Result;
use console::Term;
use rand::Rng;
use smooth_progress::ProgressBarBuilder;
use std::{thread, time::Duration};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut rng = rand::rng();

    // A bar which runs to completion and closes itself.
    let mut bar = ProgressBarBuilder::new()
        .limit(40)
        .build_with_target(Term::stdout())?;
    bar.open()?;
    while bar.is_open() {
        thread::sleep(Duration::from_millis(rng.random_range(20..80)));
        bar.increment()?;
    }

    // A bar which gives up half way and is then reused.
    let mut bar = ProgressBarBuilder::new()
        .limit(40)
        .show_percent(false)
        .build_with_target(Term::stdout())?;
    bar.open()?;
    for _ in 0..20 {
        thread::sleep(Duration::from_millis(rng.random_range(20..80)));
        bar.increment()?;
    }
    bar.interrupt(true)?;
    println!("Interrupted, progress rewound to {:?}.", bar.count());

    bar.open()?;
    for _ in 0..40 {
        bar.increment()?;
    }

    println!("\nDone!");
    Ok(())
}
