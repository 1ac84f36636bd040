//! Deterministic fixture companies and the page markup built from them.

pub mod companies;
pub mod html;

pub use companies::{Company, by_ticker, named, synthetic, universe};
pub use html::*;
