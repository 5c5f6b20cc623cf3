//! API request types for company and address operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.
//! Every field is optional at the type level: required-field policy is decided
//! by the operations module (company creation) or by the store (addresses).

use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_non_empty_string, deserialize_nullable};

/// Request payload for creating a company, optionally with one address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub vat_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<NewAddress>,
}

impl CreateCompanyRequest {
    /// Create a request with a name and VAT number.
    pub fn new(name: impl Into<String>, vat_number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            vat_number: Some(vat_number.into()),
            address: None,
        }
    }

    /// Attach an address to be created together with the company.
    pub fn with_address(mut self, address: NewAddress) -> Self {
        self.address = Some(address);
        self
    }
}

/// Address fields as received from a client.
///
/// Missing fields are passed to the store as NULL, where the NOT NULL
/// constraints reject them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl NewAddress {
    /// Create an address with every field set.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: Some(street.into()),
            city: Some(city.into()),
            state: Some(state.into()),
            zip_code: Some(zip_code.into()),
            country: Some(country.into()),
        }
    }

    /// Returns the name of the first missing field, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
            ("country", &self.country),
        ]
        .into_iter()
        .find(|(_, value)| value.is_none())
        .map(|(name, _)| name)
    }
}

/// Partial update of a company.
///
/// - `name`: omitted or `null` leaves the name unchanged.
/// - `vatNumber`: omitted leaves it unchanged, `null` clears it, a string
///   replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub vat_number: Option<Option<String>>,
}

impl CompanyPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.vat_number = Some(Some(vat_number.into()));
        self
    }

    pub fn clear_vat_number(mut self) -> Self {
        self.vat_number = Some(None);
        self
    }
}

/// Partial update of an address.
///
/// Every column is NOT NULL, so omitted and `null` fields both mean
/// "unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPatch {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl AddressPatch {
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}
