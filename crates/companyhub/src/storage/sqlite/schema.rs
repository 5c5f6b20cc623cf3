//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// Foreign keys are off by default in SQLite and must be enabled per connection.
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Companies table
CREATE TABLE IF NOT EXISTS companies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE CHECK (length(name) <= 256),
    vat_number TEXT CHECK (length(vat_number) <= 32),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Company addresses table
CREATE TABLE IF NOT EXISTS addresses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company_id INTEGER NOT NULL,
    street TEXT NOT NULL,
    city TEXT NOT NULL,
    state TEXT NOT NULL,
    zip_code TEXT NOT NULL,
    country TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (company_id) REFERENCES companies(id) ON DELETE CASCADE
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_addresses_company_id ON addresses(company_id);
"#;

pub const PING: &str = "SELECT 1";

// Company queries
pub const INSERT_COMPANY: &str = r#"
INSERT INTO companies (name, vat_number, created_at, updated_at)
VALUES (?1, ?2, ?3, ?3)
RETURNING id, name, vat_number, created_at, updated_at
"#;

pub const SELECT_COMPANIES: &str = r#"
SELECT id, name, vat_number, created_at, updated_at
FROM companies
ORDER BY id ASC
"#;

pub const SELECT_COMPANY_BY_ID: &str = r#"
SELECT id, name, vat_number, created_at, updated_at
FROM companies
WHERE id = ?1
"#;

/// `?3` is a flag telling whether `?4` replaces the VAT number, so that an
/// explicit NULL can clear it while an omitted value leaves it alone.
pub const UPDATE_COMPANY: &str = r#"
UPDATE companies
SET name = COALESCE(?2, name),
    vat_number = CASE WHEN ?3 THEN ?4 ELSE vat_number END,
    updated_at = ?5
WHERE id = ?1
"#;

pub const DELETE_COMPANY: &str = r#"
DELETE FROM companies
WHERE id = ?1
"#;

// Address queries
pub const INSERT_ADDRESS: &str = r#"
INSERT INTO addresses (company_id, street, city, state, zip_code, country, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
RETURNING id, company_id, street, city, state, zip_code, country, created_at, updated_at
"#;

pub const SELECT_ADDRESSES: &str = r#"
SELECT id, company_id, street, city, state, zip_code, country, created_at, updated_at
FROM addresses
WHERE ?1 IS NULL OR company_id = ?1
ORDER BY id ASC
"#;

pub const SELECT_ADDRESS_BY_ID: &str = r#"
SELECT id, company_id, street, city, state, zip_code, country, created_at, updated_at
FROM addresses
WHERE id = ?1
"#;

pub const UPDATE_ADDRESS: &str = r#"
UPDATE addresses
SET street = COALESCE(?3, street),
    city = COALESCE(?4, city),
    state = COALESCE(?5, state),
    zip_code = COALESCE(?6, zip_code),
    country = COALESCE(?7, country),
    updated_at = ?8
WHERE id = ?1 AND company_id = ?2
"#;

pub const DELETE_ADDRESS: &str = r#"
DELETE FROM addresses
WHERE id = ?1 AND company_id = ?2
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS companies"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS addresses"));
        assert!(CREATE_TABLES.contains("ON DELETE CASCADE"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        // Company queries
        assert!(INSERT_COMPANY.contains("RETURNING"));
        assert!(SELECT_COMPANIES.contains("ORDER BY id"));
        assert!(SELECT_COMPANY_BY_ID.contains("WHERE id = ?1"));
        assert!(UPDATE_COMPANY.contains("COALESCE"));
        assert!(DELETE_COMPANY.contains("DELETE"));

        // Address queries
        assert!(INSERT_ADDRESS.contains("RETURNING"));
        assert!(SELECT_ADDRESSES.contains("ORDER BY id"));
        assert!(UPDATE_ADDRESS.contains("company_id = ?2"));
        assert!(DELETE_ADDRESS.contains("company_id = ?2"));
    }
}
