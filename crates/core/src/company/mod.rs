mod error;
mod operations;
mod requests;
mod types;

pub use error::CompanyError;
pub use operations::{apply_address_patch, apply_company_patch, validate_create_company};
pub use requests::{AddressPatch, CompanyPatch, CreateCompanyRequest, NewAddress};
pub use types::{Address, Company, NewCompany};
