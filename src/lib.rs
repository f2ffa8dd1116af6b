//! Movie recommendation lookup service.
//!
//! Serves top-N similar movies from a precomputed similarity matrix and
//! enriches each result with metadata from an external provider, behind a
//! bounded LRU cache.

pub mod config;
pub mod dataset;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
