//! Clustering phases and orchestration.
//!
//! The three map-reduce task classes of a distributed k-means are expressed
//! as pure functions — [`assign::assign`], [`aggregate::fold_partials`],
//! [`merge::merge_final`] — composed by [`engine::run_round`] into one
//! parallel round, with [`controller::ConvergenceController`] owning the
//! iteration barrier.

pub mod aggregate;
pub mod assign;
pub mod controller;
pub mod engine;
pub mod init;
pub mod merge;
pub mod silhouette;

pub use aggregate::fold_partials;
pub use assign::assign;
pub use controller::{ConvergenceController, RunOutcome, RunState};
pub use merge::merge_final;
