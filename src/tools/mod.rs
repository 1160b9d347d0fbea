//! The tools module provides the helpers around the encoders.
//!
//! The tools are:
//! - cli: Command line interface for the benchmark.
//! - datagen: Synthetic bitmap and text payloads.
//! - freq_count: Frequency count of the input bytes.
//!
pub mod cli;
pub mod datagen;
pub mod freq_count;
