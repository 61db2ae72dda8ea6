//! Coldfront game-core library.
//!
//! Exposes the grid, procedural map generator, turn engine, and referee
//! protocol modules for use by integration tests and the binary entry
//! points.

pub mod config;
pub mod grid;
pub mod mapgen;
pub mod protocol;
pub mod referee;
pub mod selfplay;
pub mod state;
pub mod turn;
