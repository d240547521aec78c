//! Result reporting

pub mod reporter;

pub use reporter::{format_trial, TrialReporter, BANNER};
