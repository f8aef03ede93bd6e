//! Ordinal samplers.
//!
//! Each sampler comes in two flavours: a seed-taking function that builds
//! its own [`ChaChaSource`](prefsampling_env::ChaChaSource), and a `*_with`
//! function that draws from a caller-supplied [`RandomSource`](prefsampling_env::RandomSource).
//! Both consume the source in the same order.

mod impartial;
mod stratification;
mod urn;

pub use impartial::{impartial, impartial_anonymous, impartial_anonymous_with, impartial_with};
pub use stratification::{stratification, stratification_with, DEFAULT_WEIGHT};
pub use urn::{urn, urn_with, urn_with_trace, UrnDraw, DEFAULT_ALPHA};
