//! Account registration: uniqueness guard, policy enforcement, orchestration.

use tracing::{debug, info};

use altabank_accounts::{Account, policy};
use altabank_core::{AccountNumber, DomainError, DomainResult, NationalId};

use crate::customer_registry::CustomerRegistry;
use crate::store::{AccountStore, CustomerStore};

/// Validates account uniqueness and the supported currency/type policy, then
/// delegates to [`CustomerRegistry`] to attach the account to its owner and
/// finally persists the account.
pub struct AccountRegistrationService<A: AccountStore, C: CustomerStore> {
    accounts: A,
    customers: CustomerRegistry<C>,
}

impl<A: AccountStore, C: CustomerStore> AccountRegistrationService<A, C> {
    /// Create a service over an account store and a customer registry.
    pub fn new(accounts: A, customers: CustomerRegistry<C>) -> Self {
        Self { accounts, customers }
    }

    /// The customer registry this service delegates to.
    pub fn customers(&self) -> &CustomerRegistry<C> {
        &self.customers
    }

    /// Pure predicate: is the account's (currency, kind) combination in the
    /// supported policy table?
    pub fn is_supported(&self, account: &Account) -> bool {
        policy::account_is_supported(account)
    }

    /// Register an account for the customer with the given national id.
    ///
    /// Checks run in a fixed order: account-number uniqueness first
    /// ([`DomainError::DuplicateAccount`]), then the supported-type policy
    /// ([`DomainError::UnsupportedAccountType`]), then owner attachment
    /// (whose errors propagate unchanged). The account store contains the
    /// account if and only if all three steps passed.
    pub fn register_account(&self, mut account: Account, owner: NationalId) -> DomainResult<()> {
        if self.accounts.get(account.number()).is_some() {
            return Err(DomainError::duplicate_account(format!(
                "account {} already exists",
                account.number()
            )));
        }

        if !self.is_supported(&account) {
            debug!(
                account = account.number().value(),
                currency = ?account.currency(),
                kind = ?account.kind(),
                "account rejected: unsupported combination"
            );
            return Err(DomainError::unsupported_account_type(format!(
                "{:?} in {:?} is not a supported combination",
                account.kind(),
                account.currency()
            )));
        }

        self.customers.attach_account(&mut account, owner)?;
        info!(
            account = account.number().value(),
            national_id = owner.value(),
            "account registered"
        );
        self.accounts.upsert(account);
        Ok(())
    }

    /// Passthrough lookup; absence is not an error.
    pub fn find_account(&self, number: AccountNumber) -> Option<Account> {
        self.accounts.get(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use altabank_accounts::{AccountKind, Currency};
    use altabank_customers::{Customer, PersonKind};
    use chrono::NaiveDate;
    use std::sync::Arc;

    use crate::store::{InMemoryAccountStore, InMemoryCustomerStore};

    type Service = AccountRegistrationService<Arc<InMemoryAccountStore>, Arc<InMemoryCustomerStore>>;

    fn setup() -> (Service, Arc<InMemoryAccountStore>, Arc<InMemoryCustomerStore>) {
        let accounts = Arc::new(InMemoryAccountStore::new());
        let customers = Arc::new(InMemoryCustomerStore::new());
        let service = AccountRegistrationService::new(
            accounts.clone(),
            CustomerRegistry::new(customers.clone()),
        );
        (service, accounts, customers)
    }

    fn register_pepe(service: &Service) -> NationalId {
        let id = NationalId::new(26456439);
        service
            .customers()
            .register_customer(Customer::new(
                id,
                "Pepe",
                "Rino",
                NaiveDate::from_ymd_opt(1978, 3, 25).unwrap(),
                PersonKind::Natural,
            ))
            .unwrap();
        id
    }

    fn account(number: u64, currency: Currency, kind: AccountKind) -> Account {
        Account::new(AccountNumber::new(number), currency, kind, 500_000)
    }

    #[test]
    fn register_account_persists_and_links_owner() {
        let (service, accounts, customers) = setup();
        let owner = register_pepe(&service);

        service
            .register_account(
                account(1001, Currency::Pesos, AccountKind::CajaAhorro),
                owner,
            )
            .unwrap();

        let stored = accounts.get(AccountNumber::new(1001)).unwrap();
        assert_eq!(stored.owner(), Some(owner));

        let customer = customers.get(owner).unwrap();
        assert_eq!(customer.accounts().len(), 1);
        assert_eq!(customer.accounts()[0].number(), AccountNumber::new(1001));
    }

    #[test]
    fn duplicate_number_is_rejected_without_attaching() {
        let (service, _accounts, customers) = setup();
        let owner = register_pepe(&service);

        service
            .register_account(
                account(1001, Currency::Pesos, AccountKind::CajaAhorro),
                owner,
            )
            .unwrap();

        let err = service
            .register_account(
                account(1001, Currency::Pesos, AccountKind::CuentaCorriente),
                owner,
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::DuplicateAccount(_)));
        // The attach step never ran: still exactly one account.
        assert_eq!(customers.get(owner).unwrap().accounts().len(), 1);
    }

    #[test]
    fn duplicate_number_wins_over_unsupported_type() {
        let (service, accounts, _customers) = setup();
        let owner = register_pepe(&service);
        accounts.upsert(account(1001, Currency::Pesos, AccountKind::CajaAhorro));

        let err = service
            .register_account(
                account(1001, Currency::Dolares, AccountKind::CuentaCorriente),
                owner,
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::DuplicateAccount(_)));
    }

    #[test]
    fn unsupported_combination_is_rejected_before_any_write() {
        let (service, accounts, customers) = setup();
        let owner = register_pepe(&service);

        let err = service
            .register_account(
                account(1001, Currency::Dolares, AccountKind::CuentaCorriente),
                owner,
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::UnsupportedAccountType(_)));
        assert!(accounts.get(AccountNumber::new(1001)).is_none());
        assert!(customers.get(owner).unwrap().accounts().is_empty());
    }

    #[test]
    fn missing_owner_propagates_and_leaves_store_untouched() {
        let (service, accounts, _customers) = setup();

        let err = service
            .register_account(
                account(1001, Currency::Pesos, AccountKind::CajaAhorro),
                NationalId::new(999),
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::CustomerNotFound(_)));
        assert!(accounts.get(AccountNumber::new(1001)).is_none());
    }

    #[test]
    fn duplicate_kind_propagates_and_account_is_not_persisted() {
        let (service, accounts, customers) = setup();
        let owner = register_pepe(&service);

        service
            .register_account(
                account(1001, Currency::Pesos, AccountKind::CajaAhorro),
                owner,
            )
            .unwrap();

        let err = service
            .register_account(
                account(1002, Currency::Pesos, AccountKind::CajaAhorro),
                owner,
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::DuplicateAccountType(_)));
        assert!(accounts.get(AccountNumber::new(1002)).is_none());
        assert_eq!(customers.get(owner).unwrap().accounts().len(), 1);
    }

    #[test]
    fn sequential_registration_of_both_kinds_succeeds() {
        let (service, _accounts, customers) = setup();
        let owner = register_pepe(&service);

        service
            .register_account(
                account(1001, Currency::Pesos, AccountKind::CajaAhorro),
                owner,
            )
            .unwrap();
        service
            .register_account(
                account(1002, Currency::Pesos, AccountKind::CuentaCorriente),
                owner,
            )
            .unwrap();

        let customer = customers.get(owner).unwrap();
        assert_eq!(customer.accounts().len(), 2);
        assert!(customer.accounts().iter().all(|a| a.owner() == Some(owner)));
    }

    #[test]
    fn find_account_is_a_side_effect_free_query() {
        let (service, _accounts, _customers) = setup();
        let owner = register_pepe(&service);

        assert!(service.find_account(AccountNumber::new(1001)).is_none());
        assert!(service.find_account(AccountNumber::new(1001)).is_none());

        service
            .register_account(
                account(1001, Currency::Pesos, AccountKind::CajaAhorro),
                owner,
            )
            .unwrap();

        let first = service.find_account(AccountNumber::new(1001)).unwrap();
        let second = service.find_account(AccountNumber::new(1001)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn is_supported_matches_policy_table() {
        let (service, _accounts, _customers) = setup();

        assert!(service.is_supported(&account(1, Currency::Dolares, AccountKind::CajaAhorro)));
        assert!(service.is_supported(&account(2, Currency::Pesos, AccountKind::CajaAhorro)));
        assert!(service.is_supported(&account(3, Currency::Pesos, AccountKind::CuentaCorriente)));
        assert!(!service.is_supported(&account(4, Currency::Dolares, AccountKind::CuentaCorriente)));
    }
}
