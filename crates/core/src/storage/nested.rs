//! Two-step company + address creation.

use crate::company::{Company, NewAddress, NewCompany};

use super::{AddressRepository, CompanyRepository, Result};

/// Creates a company and, when given, one address owned by it.
///
/// The two writes are independent: if the address insert fails, the company
/// row stays persisted and the address error is returned.
pub async fn create_company_with_address(
    companies: &dyn CompanyRepository,
    addresses: &dyn AddressRepository,
    company: &NewCompany,
    address: Option<&NewAddress>,
) -> Result<Company> {
    let created = companies.create_company(company).await?;

    let Some(address) = address else {
        return Ok(created);
    };

    match addresses.create_address(created.id, address).await {
        Ok(address) => Ok(created.with_addresses(vec![address])),
        Err(err) => {
            tracing::warn!(
                company_id = created.id,
                error = %err,
                "Nested address creation failed, company row kept"
            );
            Err(err)
        }
    }
}
