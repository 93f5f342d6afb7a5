use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use altabank_core::{AccountNumber, NationalId};

/// Denomination of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    Pesos,
    Dolares,
}

/// Account product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Savings account (caja de ahorro).
    CajaAhorro,
    /// Checking account (cuenta corriente).
    CuentaCorriente,
}

/// A bank account.
///
/// The owner is a non-owning back-reference by national id; it is `None`
/// until the account has been attached to its customer during registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    currency: Currency,
    kind: AccountKind,
    /// Balance in the smallest currency unit (e.g., cents).
    balance: i64,
    owner: Option<NationalId>,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Create an account that has not yet been registered or attached.
    pub fn new(number: AccountNumber, currency: Currency, kind: AccountKind, balance: i64) -> Self {
        Self {
            number,
            currency,
            kind,
            balance,
            owner: None,
            opened_at: Utc::now(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn owner(&self) -> Option<NationalId> {
        self.owner
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Record the owning customer. Called by the registry during attachment.
    pub fn assign_owner(&mut self, owner: NationalId) {
        self.owner = Some(owner);
    }
}
