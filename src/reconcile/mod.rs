pub mod reconciler;
pub mod resolve;

pub use reconciler::{ReconcileError, reconcile};
