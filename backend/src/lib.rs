//! # Number Classifier
//!
//! Classifies integers by their mathematical properties and serves the result
//! over HTTP together with a fun fact from the Numbers API.
//!
//! ## Architecture
//!
//! - [`algorithms`]: Pure classification core (prime, perfect, perfect square,
//!   Armstrong, parity, digit sum). No I/O, safe to call from anywhere.
//! - [`facts`]: The [`facts::FactLookup`] capability and its implementations.
//! - [`config`]: Service configuration from environment variables or TOML.
//! - [`http`]: Axum-based HTTP server, handlers and DTOs.
//!
//! ## Example
//!
//! ```
//! use numclass::algorithms::{classify, Parity};
//!
//! let result = classify(371);
//! assert!(result.armstrong);
//! assert_eq!(result.parity, Parity::Odd);
//! assert_eq!(result.digit_sum, 11);
//! ```

pub mod algorithms;
pub mod config;
pub mod facts;

#[cfg(feature = "http-server")]
pub mod http;
