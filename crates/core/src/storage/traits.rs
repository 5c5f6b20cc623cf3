use async_trait::async_trait;

use crate::company::{Address, AddressPatch, Company, CompanyPatch, NewAddress, NewCompany};

use super::{AddressFilter, AddressScope, Result};

/// Repository for company operations.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Inserts a company and returns it with its generated id.
    async fn create_company(&self, company: &NewCompany) -> Result<Company>;

    /// Lists all companies in insertion order, without addresses.
    async fn list_companies(&self) -> Result<Vec<Company>>;

    /// Gets a company by its ID, optionally eager-loading its addresses.
    async fn get_company(&self, id: i64, with_addresses: bool) -> Result<Option<Company>>;

    /// Applies a patch and returns the number of matched rows (0 or 1).
    async fn update_company(&self, id: i64, patch: &CompanyPatch) -> Result<u64>;

    /// Deletes a company (and its addresses) and returns the number of deleted rows.
    async fn delete_company(&self, id: i64) -> Result<u64>;

    /// Checks that the store answers queries.
    async fn ping(&self) -> Result<()>;
}

/// Repository for address operations.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Inserts an address for a company and returns it with its generated id.
    async fn create_address(&self, company_id: i64, address: &NewAddress) -> Result<Address>;

    /// Lists the addresses matching a filter in insertion order.
    async fn list_addresses(&self, filter: AddressFilter) -> Result<Vec<Address>>;

    /// Gets an address by its ID.
    async fn get_address(&self, id: i64) -> Result<Option<Address>>;

    /// Applies a patch to a scoped address and returns the number of matched rows.
    async fn update_address(&self, scope: AddressScope, patch: &AddressPatch) -> Result<u64>;

    /// Deletes a scoped address and returns the number of deleted rows.
    async fn delete_address(&self, scope: AddressScope) -> Result<u64>;
}
