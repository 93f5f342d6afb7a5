//! Customer domain module.
//!
//! Business rules for bank customers, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{Customer, MINIMUM_AGE, PersonKind};
