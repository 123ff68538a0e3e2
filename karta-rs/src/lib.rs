//! Core geometry pipeline for converting labeled border geometry into
//! simplified, normalized 2D polygon groups.
//!
//! The pipeline is a pure, deterministic function of a feature collection
//! and a set of map target configurations. File I/O and serialization of
//! the results live outside this crate.

pub mod entities;
pub mod geometry;
pub mod io;
pub mod pipeline;
