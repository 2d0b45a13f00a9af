//! # resub
//! Recursive regex substitution over directory trees.
//!
//! resub walks a source directory, applies an ordered queue of
//! (pattern, replacement) regex rules to every file matching a set of
//! filename suffixes, and writes the results to a mirrored output tree.
//! Re-runs are incremental: when an output file already exists, it is
//! used as the input baseline so edits accumulate across runs.
//!
//! # resub as a library
//! The main entry point is [`resub`] (or [`Resub::run`] to get the error
//! object instead of printing it). The substitution engine
//! ([`apply_one`], [`apply_chain`]) and the JSON rule store
//! ([`ConfigStore`]) are usable on their own.

mod core;
pub use crate::core::{
    apply_chain, apply_one, is_valid_entry, resub, Config, ConfigStore, ExecuteError, FileFailure,
    Resub, Rule, RuleEntry, RunSummary, SubstError, Verbosity, DEFAULT_CONFIG_PATH,
    SUBSTITUTION_QUEUE_KEY,
};
pub mod error;
mod fs;
