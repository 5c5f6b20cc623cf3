mod error;
mod nested;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use nested::create_company_with_address;
pub use traits::{AddressRepository, CompanyRepository};
pub use types::{AddressFilter, AddressScope};
