use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business entity with a unique name and an optional VAT identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub vat_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only present when the addresses were loaded or created together
    /// with the company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
}

impl Company {
    /// Attaches a list of addresses to this company.
    pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = Some(addresses);
        self
    }
}

/// A postal address owned by exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub company_id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a company row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub name: String,
    pub vat_number: Option<String>,
}

impl NewCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vat_number: None,
        }
    }

    pub fn with_vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.vat_number = Some(vat_number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> Address {
        let now = Utc::now();
        Address {
            id: 7,
            company_id: 3,
            street: "123 Test Street".to_string(),
            city: "Test City".to_string(),
            state: "TS".to_string(),
            zip_code: "12345".to_string(),
            country: "USA".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_company_without_addresses_omits_field() {
        let now = Utc::now();
        let company = Company {
            id: 1,
            name: "Acme".to_string(),
            vat_number: None,
            created_at: now,
            updated_at: now,
            addresses: None,
        };

        let json = serde_json::to_value(&company).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Acme");
        assert!(json["vatNumber"].is_null());
        assert!(json.get("addresses").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_company_with_addresses_serializes_list() {
        let now = Utc::now();
        let company = Company {
            id: 3,
            name: "Acme".to_string(),
            vat_number: Some("US123".to_string()),
            created_at: now,
            updated_at: now,
            addresses: None,
        }
        .with_addresses(vec![sample_address()]);

        let json = serde_json::to_value(&company).unwrap();

        assert_eq!(json["vatNumber"], "US123");
        assert_eq!(json["addresses"][0]["companyId"], 3);
        assert_eq!(json["addresses"][0]["zipCode"], "12345");
    }

    #[test]
    fn test_new_company_builder() {
        let company = NewCompany::new("Acme").with_vat_number("US123");
        assert_eq!(company.name, "Acme");
        assert_eq!(company.vat_number.as_deref(), Some("US123"));
    }
}
