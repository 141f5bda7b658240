//! Stateless helpers: distances and room codes.

pub mod geo;
pub mod id;
