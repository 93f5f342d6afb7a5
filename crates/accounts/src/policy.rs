//! Supported account policy.
//!
//! A fixed rule table, not persisted state: the bank admits savings accounts
//! in both denominations and checking accounts in pesos only.

use crate::account::{Account, AccountKind, Currency};

/// The (currency, kind) combinations the bank supports.
pub const SUPPORTED: [(Currency, AccountKind); 3] = [
    (Currency::Dolares, AccountKind::CajaAhorro),
    (Currency::Pesos, AccountKind::CajaAhorro),
    (Currency::Pesos, AccountKind::CuentaCorriente),
];

/// Whether the combination is in the supported table. Pure predicate.
pub fn is_supported(currency: Currency, kind: AccountKind) -> bool {
    SUPPORTED.contains(&(currency, kind))
}

/// [`is_supported`] over an account's own currency and kind.
pub fn account_is_supported(account: &Account) -> bool {
    is_supported(account.currency(), account.kind())
}
