//! Account domain module.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod account;
pub mod policy;

pub use account::{Account, AccountKind, Currency};
pub use policy::{SUPPORTED, account_is_supported, is_supported};
