//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// All variants are deterministic caller-input or state-conflict failures.
/// The services never recover from these locally; every error is surfaced
/// unchanged to the immediate caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Customer is below the minimum registration age.
    #[error("invalid age: {0}")]
    InvalidAge(String),

    /// A customer with this national id is already registered.
    #[error("duplicate customer: {0}")]
    DuplicateCustomer(String),

    /// The referenced customer does not exist.
    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    /// An account with this number is already registered.
    #[error("duplicate account: {0}")]
    DuplicateAccount(String),

    /// The currency/type combination is outside the supported policy table.
    #[error("unsupported account type: {0}")]
    UnsupportedAccountType(String),

    /// The customer already holds an account of this type.
    #[error("duplicate account type: {0}")]
    DuplicateAccountType(String),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_age(msg: impl Into<String>) -> Self {
        Self::InvalidAge(msg.into())
    }

    pub fn duplicate_customer(msg: impl Into<String>) -> Self {
        Self::DuplicateCustomer(msg.into())
    }

    pub fn customer_not_found(msg: impl Into<String>) -> Self {
        Self::CustomerNotFound(msg.into())
    }

    pub fn duplicate_account(msg: impl Into<String>) -> Self {
        Self::DuplicateAccount(msg.into())
    }

    pub fn unsupported_account_type(msg: impl Into<String>) -> Self {
        Self::UnsupportedAccountType(msg.into())
    }

    pub fn duplicate_account_type(msg: impl Into<String>) -> Self {
        Self::DuplicateAccountType(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
