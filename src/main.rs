//! Board bring-up diagnostic binary.
//!
//! Everything about this process is fixed at build time; it reads no
//! arguments and no environment. It writes its report to the configured sink
//! and exits 0, or exits nonzero on a fatal sink failure.

use std::process::ExitCode;

use bringup_core::{config::CONFIG, report, sink::Sink};

fn main() -> ExitCode {
    let mut sink = match Sink::from_config(&CONFIG) {
        Ok(sink) => sink,
        Err(err) => return fail(err),
    };

    match report::run(&CONFIG, &mut sink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(err),
    }
}

/// Report a fatal condition on stderr, outside the harness-checked sink
/// surface, and signal failure to the invoker.
fn fail(err: bringup_core::Error) -> ExitCode {
    eprintln!("bringup: {err}");
    ExitCode::FAILURE
}
