//! Fun-fact lookup for classified numbers.
//!
//! The HTTP layer depends only on the [`FactLookup`] trait, so the outbound
//! Numbers API client can be swapped for [`FixedFacts`] in tests and offline runs.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  HTTP handler                │
//! └──────────────┬───────────────┘
//!                │ Arc<dyn FactLookup>
//!     ┌──────────┴───────────┐
//!     │                      │
//! NumbersApiClient       FixedFacts
//!  (reqwest)            (in-memory)
//! ```

pub mod error;
pub mod fixed;
pub mod lookup;

#[cfg(feature = "http-server")]
pub mod numbers_api;

pub use error::{FactError, FactResult};
pub use fixed::FixedFacts;
pub use lookup::FactLookup;

#[cfg(feature = "http-server")]
pub use numbers_api::NumbersApiClient;
