//! HTTP server module for the number classifier.
//!
//! This module provides an axum-based HTTP server that exposes the pure
//! classification core together with a fun-fact lookup.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and validation                           │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, tracing, error handling             │
//! └──────────────┬──────────────────────────┬────────────────┘
//!                │                          │
//! ┌──────────────▼─────────────┐ ┌──────────▼────────────────┐
//! │  algorithms::classify      │ │  facts::FactLookup        │
//! │  - pure, blocking pool     │ │  - Numbers API / fixed    │
//! └────────────────────────────┘ └───────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
