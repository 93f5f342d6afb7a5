use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use altabank_accounts::{Account, AccountKind};
use altabank_core::NationalId;

/// Minimum age (in years) at registration time.
pub const MINIMUM_AGE: u32 = 18;

/// Person classification of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonKind {
    /// A natural person (persona física).
    Natural,
    /// A legal entity (persona jurídica).
    Legal,
}

/// A bank customer and the accounts they own.
///
/// Identity is the national id; the account list is ordered by attachment
/// and mutated only through [`Customer::add_account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    national_id: NationalId,
    name: String,
    surname: String,
    birth_date: NaiveDate,
    kind: PersonKind,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(
        national_id: NationalId,
        name: impl Into<String>,
        surname: impl Into<String>,
        birth_date: NaiveDate,
        kind: PersonKind,
    ) -> Self {
        Self {
            national_id,
            name: name.into(),
            surname: surname.into(),
            birth_date,
            kind,
            accounts: Vec::new(),
        }
    }

    pub fn national_id(&self) -> NationalId {
        self.national_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Completed years of age on the given date. A birth date in the future
    /// counts as zero.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }

    /// Invariant helper: whether this customer meets the minimum age.
    pub fn is_of_age_on(&self, today: NaiveDate) -> bool {
        self.age_on(today) >= MINIMUM_AGE
    }

    /// Whether the customer already holds an account of the given kind.
    ///
    /// Currency is deliberately not part of this check: a pesos savings
    /// account blocks a dolares savings account as well.
    pub fn holds_account_kind(&self, kind: AccountKind) -> bool {
        self.accounts.iter().any(|a| a.kind() == kind)
    }

    /// Append an account to this customer's collection.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }
}
