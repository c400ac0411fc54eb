pub mod reconcile;
pub mod session;
