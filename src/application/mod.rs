//! Application layer: coordinators that hold providers and apply selection
//! policies.
//!
//! Coordinators depend only on the capability interfaces in
//! `domain::ports`. Provider failures are absorbed here and turned into the
//! next candidate; callers only see a final `DispatchError`.

pub mod checkout;
pub mod payments;
pub mod repositories;
pub mod streaming;
pub mod users;
