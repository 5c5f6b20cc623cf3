use crate::company::Address;

/// Equality filter for listing addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressFilter {
    pub company_id: Option<i64>,
}

impl AddressFilter {
    /// Matches the addresses owned by one company.
    pub fn for_company(company_id: i64) -> Self {
        Self {
            company_id: Some(company_id),
        }
    }

    pub fn matches(&self, address: &Address) -> bool {
        self.company_id.is_none_or(|id| address.company_id == id)
    }
}

/// Identifies an address through its owning company.
///
/// Writes scoped this way only touch the row when both ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressScope {
    pub company_id: i64,
    pub address_id: i64,
}

impl AddressScope {
    pub fn new(company_id: i64, address_id: i64) -> Self {
        Self {
            company_id,
            address_id,
        }
    }

    pub fn matches(&self, address: &Address) -> bool {
        address.id == self.address_id && address.company_id == self.company_id
    }
}
