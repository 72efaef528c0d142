//! Per-family chain adapters behind one polymorphic fetch capability.

pub mod dto;
pub mod handler;

pub use handler::{ChainAdapter, ChainAdapters, EvmAdapter, SolanaAdapter};
