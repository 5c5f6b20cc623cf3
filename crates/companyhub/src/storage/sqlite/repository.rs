//! SQLite repository implementation.
//!
//! Implements the repository traits from `companyhub_core::storage` using SQLite.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use companyhub_core::company::{
    Address, AddressPatch, Company, CompanyPatch, NewAddress, NewCompany,
};
use companyhub_core::storage::{
    AddressFilter, AddressRepository, AddressScope, CompanyRepository, RepositoryError, Result,
};

use super::conversions::{format_datetime, row_to_address, row_to_company};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Every statement runs on the single background thread owned by the
/// `tokio_rusqlite` connection. The connection closes when the repository
/// is dropped.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str, busy_timeout: Duration) -> Result<Self> {
        if path == ":memory:" {
            return Self::new_in_memory().await;
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        conn.call(move |conn| conn.busy_timeout(busy_timeout).map_err(wrap_err))
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// CompanyRepository implementation
// ============================================================================

#[async_trait]
impl CompanyRepository for SqliteRepository {
    async fn create_company(&self, company: &NewCompany) -> Result<Company> {
        let name = company.name.clone();
        let vat_number = company.vat_number.clone();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_COMPANY,
                    rusqlite::params![name, vat_number, now],
                    row_to_company,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Company"))
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_COMPANIES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_company).map_err(wrap_err)?;

                let mut companies = Vec::new();
                for row_result in rows {
                    companies.push(row_result.map_err(wrap_err)?);
                }
                Ok(companies)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Company"))
    }

    async fn get_company(&self, id: i64, with_addresses: bool) -> Result<Option<Company>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_COMPANY_BY_ID)
                    .map_err(wrap_err)?;
                let company = match stmt.query_row([id], row_to_company) {
                    Ok(company) => company,
                    Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                    Err(e) => return Err(wrap_err(e)),
                };

                if !with_addresses {
                    return Ok(Some(company));
                }

                let mut stmt = conn.prepare(schema::SELECT_ADDRESSES).map_err(wrap_err)?;
                let rows = stmt.query_map([id], row_to_address).map_err(wrap_err)?;

                let mut addresses = Vec::new();
                for row_result in rows {
                    addresses.push(row_result.map_err(wrap_err)?);
                }
                Ok(Some(company.with_addresses(addresses)))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Company"))
    }

    async fn update_company(&self, id: i64, patch: &CompanyPatch) -> Result<u64> {
        let name = patch.name.clone();
        let replace_vat = patch.vat_number.is_some();
        let vat_number = patch.vat_number.clone().flatten();
        let updated_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_COMPANY,
                        rusqlite::params![id, name, replace_vat, vat_number, updated_at],
                    )
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Company"))
    }

    async fn delete_company(&self, id: i64) -> Result<u64> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_COMPANY, [id])
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Company"))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Company"))
    }
}

// ============================================================================
// AddressRepository implementation
// ============================================================================

#[async_trait]
impl AddressRepository for SqliteRepository {
    async fn create_address(&self, company_id: i64, address: &NewAddress) -> Result<Address> {
        let NewAddress {
            street,
            city,
            state,
            zip_code,
            country,
        } = address.clone();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_ADDRESS,
                    rusqlite::params![company_id, street, city, state, zip_code, country, now],
                    row_to_address,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Address"))
    }

    async fn list_addresses(&self, filter: AddressFilter) -> Result<Vec<Address>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ADDRESSES).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([filter.company_id], row_to_address)
                    .map_err(wrap_err)?;

                let mut addresses = Vec::new();
                for row_result in rows {
                    addresses.push(row_result.map_err(wrap_err)?);
                }
                Ok(addresses)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Address"))
    }

    async fn get_address(&self, id: i64) -> Result<Option<Address>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ADDRESS_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_address) {
                    Ok(address) => Ok(Some(address)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Address"))
    }

    async fn update_address(&self, scope: AddressScope, patch: &AddressPatch) -> Result<u64> {
        let AddressPatch {
            street,
            city,
            state,
            zip_code,
            country,
        } = patch.clone();
        let updated_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ADDRESS,
                        rusqlite::params![
                            scope.address_id,
                            scope.company_id,
                            street,
                            city,
                            state,
                            zip_code,
                            country,
                            updated_at
                        ],
                    )
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Address"))
    }

    async fn delete_address(&self, scope: AddressScope) -> Result<u64> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::DELETE_ADDRESS,
                        [scope.address_id, scope.company_id],
                    )
                    .map_err(wrap_err)?;
                Ok(rows as u64)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Address"))
    }
}
