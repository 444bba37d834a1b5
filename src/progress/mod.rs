//! Progress reporting for crunch runs.
//!
//! The crunch engine polls a plain `Fn(usize, usize)` callback on a coarse
//! timer (see `crate::engine::CrunchParams::progress_report_func`) rather
//! than pushing a rich event type through a channel: the callback exists to
//! give a human something to watch, not to drive control flow, so there is
//! no phase enum, no cancellation flag, and no event struct here.

use std::io::Write;

/// Ready-made progress callback: prints a spinner, an ASCII bracket bar, and
/// a percentage/count line, matching the look of the original tool's
/// hand-rolled console reporter.
///
/// ```
/// use slippcrunch::progress::bar_reporter;
///
/// let report = bar_reporter();
/// report(5, 10);
/// ```
pub fn bar_reporter() -> impl Fn(usize, usize) {
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SPINNER: [char; 4] = ['-', '\\', '|', '/'];
    const BAR_WIDTH: usize = 50;

    let tick = AtomicUsize::new(0);

    move |processed: usize, total: usize| {
        let spin = SPINNER[tick.fetch_add(1, Ordering::Relaxed) % SPINNER.len()];
        let progress = if total == 0 {
            1.0
        } else {
            processed as f32 / total as f32
        };

        let filled = (progress * BAR_WIDTH as f32).floor() as usize;
        let filled = filled.min(BAR_WIDTH);
        let hollow = BAR_WIDTH - filled;

        let arrow = if hollow > 0 { ">" } else { "" };
        let hollow_spaces = " ".repeat(hollow.saturating_sub(if hollow > 0 { 1 } else { 0 }));

        print!(
            "\r{spin} Crunching... [{filled_bar}{arrow}{hollow_bar}] {pct:.0}% ({processed}/{total} files)",
            filled_bar = "-".repeat(filled),
            hollow_bar = hollow_spaces,
            pct = (progress * 100.0).floor(),
        );
        let _ = std::io::stdout().flush();
        if processed >= total {
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_reporter_does_not_panic_on_empty_batch() {
        let report = bar_reporter();
        report(0, 0);
    }

    #[test]
    fn bar_reporter_does_not_panic_across_a_full_run() {
        let report = bar_reporter();
        for processed in 0..=10 {
            report(processed, 10);
        }
    }
}
