//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use companyhub_core::company::{
    apply_address_patch, apply_company_patch, Address, AddressPatch, Company, CompanyPatch,
    NewAddress, NewCompany,
};
use companyhub_core::storage::{
    AddressFilter, AddressRepository, AddressScope, CompanyRepository, RepositoryError, Result,
};

const MAX_NAME_LEN: usize = 256;
const MAX_VAT_LEN: usize = 32;

#[derive(Debug, Default)]
struct Store {
    companies: BTreeMap<i64, Company>,
    addresses: BTreeMap<i64, Address>,
    last_company_id: i64,
    last_address_id: i64,
}

impl Store {
    fn check_company(&self, id: Option<i64>, name: &str, vat: Option<&str>) -> Result<()> {
        if name.chars().count() > MAX_NAME_LEN {
            return Err(RepositoryError::constraint(
                "Company",
                "CHECK constraint failed: length(name) <= 256",
            ));
        }
        if vat.is_some_and(|v| v.chars().count() > MAX_VAT_LEN) {
            return Err(RepositoryError::constraint(
                "Company",
                "CHECK constraint failed: length(vat_number) <= 32",
            ));
        }
        if self
            .companies
            .values()
            .any(|c| c.name == name && Some(c.id) != id)
        {
            return Err(RepositoryError::constraint(
                "Company",
                "UNIQUE constraint failed: companies.name",
            ));
        }
        Ok(())
    }
}

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryRepository {
    async fn create_company(&self, company: &NewCompany) -> Result<Company> {
        let mut store = self.store.write().await;
        store.check_company(None, &company.name, company.vat_number.as_deref())?;

        store.last_company_id += 1;
        let now = Utc::now();
        let created = Company {
            id: store.last_company_id,
            name: company.name.clone(),
            vat_number: company.vat_number.clone(),
            created_at: now,
            updated_at: now,
            addresses: None,
        };
        store.companies.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        let store = self.store.read().await;
        Ok(store.companies.values().cloned().collect())
    }

    async fn get_company(&self, id: i64, with_addresses: bool) -> Result<Option<Company>> {
        let store = self.store.read().await;
        let Some(company) = store.companies.get(&id).cloned() else {
            return Ok(None);
        };

        if !with_addresses {
            return Ok(Some(company));
        }

        let filter = AddressFilter::for_company(id);
        let addresses = store
            .addresses
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        Ok(Some(company.with_addresses(addresses)))
    }

    async fn update_company(&self, id: i64, patch: &CompanyPatch) -> Result<u64> {
        let mut store = self.store.write().await;
        let Some(mut company) = store.companies.get(&id).cloned() else {
            return Ok(0);
        };

        apply_company_patch(&mut company, patch, Utc::now());
        store.check_company(Some(id), &company.name, company.vat_number.as_deref())?;
        store.companies.insert(id, company);
        Ok(1)
    }

    async fn delete_company(&self, id: i64) -> Result<u64> {
        let mut store = self.store.write().await;
        if store.companies.remove(&id).is_none() {
            return Ok(0);
        }
        store.addresses.retain(|_, a| a.company_id != id);
        Ok(1)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl AddressRepository for InMemoryRepository {
    async fn create_address(&self, company_id: i64, address: &NewAddress) -> Result<Address> {
        if let Some(field) = address.first_missing_field() {
            return Err(RepositoryError::constraint(
                "Address",
                format!("NOT NULL constraint failed: addresses.{field}"),
            ));
        }

        let mut store = self.store.write().await;
        if !store.companies.contains_key(&company_id) {
            return Err(RepositoryError::constraint(
                "Address",
                "FOREIGN KEY constraint failed",
            ));
        }

        store.last_address_id += 1;
        let now = Utc::now();
        let NewAddress {
            street,
            city,
            state,
            zip_code,
            country,
        } = address.clone();
        let created = Address {
            id: store.last_address_id,
            company_id,
            street: street.unwrap_or_default(),
            city: city.unwrap_or_default(),
            state: state.unwrap_or_default(),
            zip_code: zip_code.unwrap_or_default(),
            country: country.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        store.addresses.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list_addresses(&self, filter: AddressFilter) -> Result<Vec<Address>> {
        let store = self.store.read().await;
        Ok(store
            .addresses
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }

    async fn get_address(&self, id: i64) -> Result<Option<Address>> {
        let store = self.store.read().await;
        Ok(store.addresses.get(&id).cloned())
    }

    async fn update_address(&self, scope: AddressScope, patch: &AddressPatch) -> Result<u64> {
        let mut store = self.store.write().await;
        match store
            .addresses
            .get_mut(&scope.address_id)
            .filter(|a| scope.matches(a))
        {
            Some(address) => {
                apply_address_patch(address, patch, Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_address(&self, scope: AddressScope) -> Result<u64> {
        let mut store = self.store.write().await;
        let owned = store
            .addresses
            .get(&scope.address_id)
            .is_some_and(|a| scope.matches(a));
        if !owned {
            return Ok(0);
        }
        store.addresses.remove(&scope.address_id);
        Ok(1)
    }
}
