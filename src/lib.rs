//! Raked sand garden: a grid of tiny colored grains that a rake under the
//! mouse pushes around and shades into furrows.
//!
//! [`sim::Simulation`] owns the grains, the pointer and the active rake;
//! the binary feeds it window input and presents the frames it draws.

pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod grid;
pub mod rake;
pub mod rule;
pub mod schedule;
pub mod sim;
pub mod types;
