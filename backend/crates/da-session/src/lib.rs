//! Operation boundary between the store and whatever presents it.
//!
//! Write paths never return errors to the caller: they log, roll back and
//! hand back an [`ActionOutcome`]. Read paths log and return empty lists.

pub mod action_outcome;
pub mod bootstrap;
pub mod masking_workflow;
pub mod persist_report;
pub mod record_service;
pub mod session;

pub use action_outcome::ActionOutcome;
pub use bootstrap::{authenticator_from, seed_entries_from};
pub use masking_workflow::MaskingWorkflow;
pub use persist_report::PersistReport;
pub use record_service::RecordService;
pub use session::{AdminSession, Session};
