//! Request and response types, grouped by endpoint.

pub mod exchange;
pub mod info;
