//! Intermediate Representation (IR) for host class documentation
//!
//! This module provides the documentation records supplied by the host's
//! documentation collector and the ordered model that holds them.

pub mod class;
pub mod model;

pub use class::*;
pub use model::*;
