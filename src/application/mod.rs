//! Application layer: request orchestration.

pub mod shortener;

pub use shortener::{ShortenOutcome, ShortenerService};
