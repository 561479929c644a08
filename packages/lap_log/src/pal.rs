//! Platform abstraction layer for the tracker's collaborators.
//!
//! The tracker reads the clock, probes free memory and terminal width, asks for the current
//! thread name and writes lines through the [`Platform`] trait. The layering is abstraction
//! (trait) -> facade (enum) -> real implementation, with a fake and a mockall mock available
//! in test builds.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
#[cfg(test)]
pub(crate) use fake::*;
pub(crate) use real::*;
