//! Trial reporter - human-readable output
//!
//! Writes the banner and one line per trial. Nothing is aggregated: each
//! line is written as soon as its trial finishes and then forgotten.

use std::io::{self, Write};

use crate::benchmark::Trial;

/// Banner printed before the first trial
pub const BANNER: &str = "
This is a simple test of a free-threaded runtime. It runs a computationally heavy-ish
task on alternating number of CPU threads. In a free-threaded environment, the execution times
of the runs shall be similar.
";

/// Format a trial as `nt=<N>.\tElapsed time <D> ns`
pub fn format_trial(trial: &Trial) -> String {
    format!(
        "nt={}.\tElapsed time {} ns",
        trial.threads,
        trial.elapsed_ns()
    )
}

/// Streams benchmark output to a writer (stdout in the binary)
pub struct TrialReporter<W: Write> {
    out: W,
}

impl<W: Write> TrialReporter<W> {
    /// Create new reporter over the given writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the descriptive banner
    pub fn report_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        self.out.flush()
    }

    /// Write one trial line and flush it
    ///
    /// Flushing per line keeps earlier results visible if a later trial
    /// aborts the run.
    pub fn report_trial(&mut self, trial: &Trial) -> io::Result<()> {
        writeln!(self.out, "{}", format_trial(trial))?;
        self.out.flush()
    }

    /// Consume the reporter and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
