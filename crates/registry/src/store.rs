//! Keyed lookup/save store contracts consumed by the services.
//!
//! The surrounding infrastructure supplies real implementations; the
//! in-memory ones here back the tests and embedded use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use altabank_accounts::Account;
use altabank_core::{AccountNumber, NationalId};
use altabank_customers::Customer;

/// Customer persistence contract.
///
/// The existence probe and the full lookup are separate operations on
/// purpose: `exists` must not pay for loading the customer's accounts,
/// while `get` always returns them loaded.
pub trait CustomerStore: Send + Sync {
    /// Lightweight probe: is a customer with this national id stored?
    fn exists(&self, national_id: NationalId) -> bool;
    /// Full lookup with the customer's accounts loaded.
    fn get(&self, national_id: NationalId) -> Option<Customer>;
    fn upsert(&self, customer: Customer);
}

/// Account persistence contract.
pub trait AccountStore: Send + Sync {
    fn get(&self, number: AccountNumber) -> Option<Account>;
    fn upsert(&self, account: Account);
}

impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    fn exists(&self, national_id: NationalId) -> bool {
        (**self).exists(national_id)
    }

    fn get(&self, national_id: NationalId) -> Option<Customer> {
        (**self).get(national_id)
    }

    fn upsert(&self, customer: Customer) {
        (**self).upsert(customer)
    }
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn get(&self, number: AccountNumber) -> Option<Account> {
        (**self).get(number)
    }

    fn upsert(&self, account: Account) {
        (**self).upsert(account)
    }
}

/// In-memory customer store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<HashMap<NationalId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn exists(&self, national_id: NationalId) -> bool {
        match self.inner.read() {
            Ok(map) => map.contains_key(&national_id),
            Err(_) => false,
        }
    }

    fn get(&self, national_id: NationalId) -> Option<Customer> {
        let map = self.inner.read().ok()?;
        map.get(&national_id).cloned()
    }

    fn upsert(&self, customer: Customer) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(customer.national_id(), customer);
        }
    }
}

/// In-memory account store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<HashMap<AccountNumber, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, number: AccountNumber) -> Option<Account> {
        let map = self.inner.read().ok()?;
        map.get(&number).cloned()
    }

    fn upsert(&self, account: Account) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(account.number(), account);
        }
    }
}
