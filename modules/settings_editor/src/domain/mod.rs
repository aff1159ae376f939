//! Domain layer - reconciliation, validation and persistence logic

pub mod baseline;
pub mod persist;
pub mod reconcile;
pub mod repository;
pub mod service;
pub mod validation;

pub use baseline::Baseline;
pub use persist::{persist, PersistError};
pub use reconcile::{reconcile, Reconciled};
pub use repository::{Session, SettingsStore, StoreSession, StoreTransaction};
pub use service::SessionController;
