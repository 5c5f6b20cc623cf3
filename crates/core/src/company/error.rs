use thiserror::Error;

/// Errors that can occur when validating a company request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompanyError {
    #[error("Name and VAT number are required")]
    MissingRequiredFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_error_display() {
        assert_eq!(
            CompanyError::MissingRequiredFields.to_string(),
            "Name and VAT number are required"
        );
    }
}
