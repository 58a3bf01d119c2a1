//! Miniature Hyperliquid SDK used as an analysis fixture.

pub mod exchange;
pub mod info;
pub mod transport;
pub mod types;
