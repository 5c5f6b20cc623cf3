//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use companyhub_core::company::{Address, Company};

/// Convert a SQLite row to a Company (without addresses).
///
/// Expected columns: id, name, vat_number, created_at, updated_at
pub fn row_to_company(row: &Row) -> rusqlite::Result<Company> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let vat_number: Option<String> = row.get(2)?;
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(Company {
        id,
        name,
        vat_number,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
        addresses: None,
    })
}

/// Convert a SQLite row to an Address.
///
/// Expected columns: id, company_id, street, city, state, zip_code, country, created_at, updated_at
pub fn row_to_address(row: &Row) -> rusqlite::Result<Address> {
    let created_at: String = row.get(7)?;
    let updated_at: String = row.get(8)?;

    Ok(Address {
        id: row.get(0)?,
        company_id: row.get(1)?,
        street: row.get(2)?,
        city: row.get(3)?,
        state: row.get(4)?,
        zip_code: row.get(5)?,
        country: row.get(6)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        let dt = DateTime::parse_from_rfc3339("2024-06-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let formatted = format_datetime(&dt);
        assert!(formatted.starts_with("2024-06-15"));
        assert!(formatted.contains("10:30:00"));
    }

    #[test]
    fn test_datetime_survives_storage_format() {
        let now = Utc::now();
        let parsed = parse_datetime(&format_datetime(&now)).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        let result = parse_datetime("not-a-datetime");
        assert!(result.is_err());
    }

    #[test]
    fn test_row_to_company_reads_nullable_vat() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let company = conn
            .query_row(
                "SELECT 4, 'Acme', NULL, '2024-06-15T10:30:00+00:00', '2024-06-15T10:30:00+00:00'",
                [],
                row_to_company,
            )
            .unwrap();

        assert_eq!(company.id, 4);
        assert_eq!(company.name, "Acme");
        assert_eq!(company.vat_number, None);
        assert!(company.addresses.is_none());
    }

    #[test]
    fn test_row_to_address() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let address = conn
            .query_row(
                "SELECT 2, 4, '1 Main', 'Springfield', 'IL', '62701', 'USA', \
                 '2024-06-15T10:30:00+00:00', '2024-06-15T11:30:00+00:00'",
                [],
                row_to_address,
            )
            .unwrap();

        assert_eq!(address.id, 2);
        assert_eq!(address.company_id, 4);
        assert_eq!(address.zip_code, "62701");
        assert!(address.updated_at > address.created_at);
    }
}
