//! Customer registration and account attachment rules.

use chrono::Utc;
use tracing::{debug, info};

use altabank_accounts::Account;
use altabank_core::{DomainError, DomainResult, NationalId};
use altabank_customers::{Customer, MINIMUM_AGE};

use crate::store::CustomerStore;

/// Owns customer identity, the age-eligibility rule, and per-customer
/// account-type uniqueness.
pub struct CustomerRegistry<S: CustomerStore> {
    store: S,
}

impl<S: CustomerStore> CustomerRegistry<S> {
    /// Create a registry backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new customer.
    ///
    /// Fails with [`DomainError::InvalidAge`] if the customer is under
    /// [`MINIMUM_AGE`] at call time, or [`DomainError::DuplicateCustomer`]
    /// if the national id is already taken. No other fields are validated
    /// here. On success the customer is saved unchanged.
    pub fn register_customer(&self, customer: Customer) -> DomainResult<()> {
        let today = Utc::now().date_naive();
        if !customer.is_of_age_on(today) {
            debug!(
                national_id = customer.national_id().value(),
                age = customer.age_on(today),
                "customer rejected: under minimum age"
            );
            return Err(DomainError::invalid_age(format!(
                "customer {} is {} years old, minimum is {}",
                customer.national_id(),
                customer.age_on(today),
                MINIMUM_AGE
            )));
        }

        if self.store.exists(customer.national_id()) {
            return Err(DomainError::duplicate_customer(format!(
                "national id {} is already registered",
                customer.national_id()
            )));
        }

        info!(national_id = customer.national_id().value(), "customer registered");
        self.store.upsert(customer);
        Ok(())
    }

    /// Attach an account to the customer with the given national id.
    ///
    /// Sets the account's owner back-reference, appends a copy to the
    /// customer's account collection, and saves the updated customer. Fails
    /// with [`DomainError::CustomerNotFound`] if the owner does not exist,
    /// or [`DomainError::DuplicateAccountType`] if the customer already
    /// holds an account of the same kind (the existing account's currency is
    /// not considered).
    pub fn attach_account(&self, account: &mut Account, owner: NationalId) -> DomainResult<()> {
        let mut customer = self
            .store
            .get(owner)
            .ok_or_else(|| DomainError::customer_not_found(format!("national id {owner}")))?;

        if customer.holds_account_kind(account.kind()) {
            return Err(DomainError::duplicate_account_type(format!(
                "customer {} already holds a {:?} account",
                owner,
                account.kind()
            )));
        }

        account.assign_owner(customer.national_id());
        customer.add_account(account.clone());
        self.store.upsert(customer);

        debug!(
            national_id = owner.value(),
            account = account.number().value(),
            "account attached to customer"
        );
        Ok(())
    }

    /// Look up a customer, accounts loaded.
    pub fn find_by_national_id(&self, national_id: NationalId) -> DomainResult<Customer> {
        self.store
            .get(national_id)
            .ok_or_else(|| DomainError::customer_not_found(format!("national id {national_id}")))
    }
}
