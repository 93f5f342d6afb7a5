//! Registration services: customer registry and account registration.
//!
//! The two cooperating services that own the domain invariants — the
//! customer-side rules (minimum age, national-id uniqueness, one account per
//! type per customer) and the account-side rules (account-number uniqueness,
//! supported currency/type policy) plus the orchestration between them.
//!
//! Services take their store dependencies as explicit constructor parameters
//! and are generic over the store traits, so tests and embedders substitute
//! in-memory fakes directly.

pub mod account_service;
pub mod customer_registry;
pub mod store;


pub use account_service::AccountRegistrationService;
pub use customer_registry::CustomerRegistry;
pub use store::{AccountStore, CustomerStore, InMemoryAccountStore, InMemoryCustomerStore};
