//! Shared library surface for the fuel planning service and its tests.

pub mod api;
pub mod config;
pub mod state;
