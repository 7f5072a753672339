//! Report formatting and the cycle loop.
//!
//! The output contract is byte-exact and checked externally, so the shapes
//! here (blank lines, `Cycle: <n>`, one prime per line) must not drift.

use std::{io::Write, time::Instant};

use crate::{config::Config, error::Error, primes::primes_below};

/// Program version reported in the banner.
pub const VERSION: &str = "1.1";

/// Date this binary was built, embedded by the build script. Stands in for
/// the C `__DATE__` macro; e.g. `Aug 25 2026`.
pub const BUILD_DATE: &str = env!("BRINGUP_BUILD_DATE");

/// Write the one-line banner, e.g. `bringup 1.1  (Aug 25 2026)`.
///
/// The date is passed in rather than read ambiently so tests can pin it.
/// Two spaces separate the version from the parenthesised date.
pub fn write_banner<W: Write>(sink: &mut W, date: &str) -> Result<(), Error> {
    writeln!(sink, "bringup {VERSION}  ({date})")?;
    Ok(())
}

/// Write one cycle section: a blank line, the 1-based cycle header, and the
/// prime listing for the configured bound, one prime per line.
pub fn write_cycle<W: Write>(sink: &mut W, cycle: u32, max: u32) -> Result<(), Error> {
    writeln!(sink, "\nCycle: {cycle}")?;
    writeln!(sink, "The primes from 2 to {max} are:")?;
    for prime in primes_below(max) {
        writeln!(sink, "{prime}")?;
    }
    Ok(())
}

/// Write the elapsed-time trailer: a blank line, `Test time: <ms>ms`, and a
/// trailing blank line. Nothing may follow it.
pub fn write_timing<W: Write>(sink: &mut W, elapsed_ms: u128) -> Result<(), Error> {
    writeln!(sink, "\nTest time: {elapsed_ms}ms")?;
    writeln!(sink)?;
    Ok(())
}

/// Run the full diagnostic: banner, then `num_cycles` sequential cycles,
/// then the timing trailer if enabled.
///
/// The measurement interval starts immediately before the first cycle (the
/// banner is excluded) and ends after the last cycle once the sink has been
/// flushed, so buffered output cannot reorder past the clock read. Elapsed
/// time is whole milliseconds, truncated.
pub fn run<W: Write>(config: &Config, sink: &mut W) -> Result<(), Error> {
    write_banner(sink, BUILD_DATE)?;

    let start = config.measure_time.then(Instant::now);
    for cycle in 1..=config.num_cycles {
        write_cycle(sink, cycle, config.max_prime_candidate)?;
    }

    if let Some(start) = start {
        sink.flush()?;
        write_timing(sink, start.elapsed().as_millis())?;
    }

    sink.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_shape() {
        let mut out = Vec::new();
        write_banner(&mut out, "Aug 25 2026").unwrap();
        assert_eq!(out, b"bringup 1.1  (Aug 25 2026)\n");
    }

    #[test]
    fn banner_day_is_not_zero_padded() {
        let mut out = Vec::new();
        write_banner(&mut out, "Sep 4 2026").unwrap();
        assert_eq!(out, b"bringup 1.1  (Sep 4 2026)\n");
    }

    #[test]
    fn cycle_section_shape() {
        let mut out = Vec::new();
        write_cycle(&mut out, 1, 10).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nCycle: 1\nThe primes from 2 to 10 are:\n2\n3\n5\n7\n"
        );
    }

    #[test]
    fn timing_trailer_shape() {
        let mut out = Vec::new();
        write_timing(&mut out, 0).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nTest time: 0ms\n\n");
    }
}
