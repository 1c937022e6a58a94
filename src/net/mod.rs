//! REST client layer: wire types, error taxonomy, and the `Api` seam.

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub mod test_api;
