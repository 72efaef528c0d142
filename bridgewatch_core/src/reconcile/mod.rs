//! The reconciliation pass: oracle, paced per-network fetches, residual math.

pub mod handler;
pub mod pacer;

pub use handler::{sort_by_balance, Reconciler};
pub use pacer::Pacer;
