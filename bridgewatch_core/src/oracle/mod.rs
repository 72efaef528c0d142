//! Authoritative total-supply API client.

pub mod dto;
pub mod handler;

pub use handler::SupplyOracle;
