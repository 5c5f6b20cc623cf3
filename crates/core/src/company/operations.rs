use chrono::{DateTime, Utc};

use super::error::CompanyError;
use super::requests::{AddressPatch, CompanyPatch, CreateCompanyRequest, NewAddress};
use super::types::{Address, Company, NewCompany};

/// Validates a create request and splits it into the company row and the
/// optional nested address.
///
/// Both `name` and `vatNumber` must be present and non-empty. Whitespace-only
/// values count as present.
pub fn validate_create_company(
    req: CreateCompanyRequest,
) -> Result<(NewCompany, Option<NewAddress>), CompanyError> {
    match (req.name, req.vat_number) {
        (Some(name), Some(vat_number)) => Ok((
            NewCompany::new(name).with_vat_number(vat_number),
            req.address,
        )),
        _ => Err(CompanyError::MissingRequiredFields),
    }
}

/// Applies a patch to a company, refreshing its `updated_at` timestamp.
pub fn apply_company_patch(company: &mut Company, patch: &CompanyPatch, now: DateTime<Utc>) {
    if let Some(name) = &patch.name {
        company.name = name.clone();
    }
    if let Some(vat_number) = &patch.vat_number {
        company.vat_number = vat_number.clone();
    }
    company.updated_at = now;
}

/// Applies a patch to an address, refreshing its `updated_at` timestamp.
pub fn apply_address_patch(address: &mut Address, patch: &AddressPatch, now: DateTime<Utc>) {
    let fields = [
        (&mut address.street, &patch.street),
        (&mut address.city, &patch.city),
        (&mut address.state, &patch.state),
        (&mut address.zip_code, &patch.zip_code),
        (&mut address.country, &patch.country),
    ];
    for (current, update) in fields {
        if let Some(value) = update {
            *current = value.clone();
        }
    }
    address.updated_at = now;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn company() -> Company {
        let created = Utc::now() - Duration::hours(1);
        Company {
            id: 1,
            name: "Acme".to_string(),
            vat_number: Some("US111".to_string()),
            created_at: created,
            updated_at: created,
            addresses: None,
        }
    }

    fn address() -> Address {
        let created = Utc::now() - Duration::hours(1);
        Address {
            id: 1,
            company_id: 1,
            street: "1 Main".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
            country: "USA".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_validate_create_company_ok() {
        let req = CreateCompanyRequest::new("Acme", "US123");
        let (company, address) = validate_create_company(req).unwrap();
        assert_eq!(company, NewCompany::new("Acme").with_vat_number("US123"));
        assert!(address.is_none());
    }

    #[test]
    fn test_validate_create_company_keeps_address() {
        let nested = NewAddress::new("1 Main", "Springfield", "IL", "62701", "USA");
        let req = CreateCompanyRequest::new("Acme", "US123").with_address(nested.clone());
        let (_, address) = validate_create_company(req).unwrap();
        assert_eq!(address, Some(nested));
    }

    #[test]
    fn test_validate_create_company_missing_vat() {
        let req = CreateCompanyRequest {
            name: Some("Acme".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_create_company(req),
            Err(CompanyError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_validate_create_company_missing_name() {
        let req = CreateCompanyRequest {
            vat_number: Some("US123".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_create_company(req),
            Err(CompanyError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_validate_create_company_whitespace_name_is_present() {
        let json = r#"{"name": "   ", "vatNumber": "US1"}"#;
        let req: CreateCompanyRequest = serde_json::from_str(json).unwrap();

        let (company, _) = validate_create_company(req).unwrap();

        assert_eq!(company.name, "   ");
    }

    #[test]
    fn test_validate_create_company_empty_name_is_missing() {
        let json = r#"{"name": "", "vatNumber": "US1"}"#;
        let req: CreateCompanyRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            validate_create_company(req),
            Err(CompanyError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_apply_company_patch_replaces_fields() {
        let mut company = company();
        let now = Utc::now();
        let patch = CompanyPatch::default()
            .with_name("Acme Corp")
            .with_vat_number("US999");

        apply_company_patch(&mut company, &patch, now);

        assert_eq!(company.name, "Acme Corp");
        assert_eq!(company.vat_number.as_deref(), Some("US999"));
        assert_eq!(company.updated_at, now);
    }

    #[test]
    fn test_apply_company_patch_clears_vat() {
        let mut company = company();
        apply_company_patch(
            &mut company,
            &CompanyPatch::default().clear_vat_number(),
            Utc::now(),
        );
        assert_eq!(company.name, "Acme");
        assert_eq!(company.vat_number, None);
    }

    #[test]
    fn test_apply_company_patch_empty_only_touches_timestamp() {
        let mut company = company();
        let before = company.clone();
        let now = Utc::now();

        apply_company_patch(&mut company, &CompanyPatch::default(), now);

        assert_eq!(company.name, before.name);
        assert_eq!(company.vat_number, before.vat_number);
        assert!(company.updated_at > before.updated_at);
    }

    #[test]
    fn test_apply_address_patch_keeps_omitted_fields() {
        let mut address = address();
        let patch = AddressPatch::default()
            .with_street("Updated Street")
            .with_city("Updated City");

        apply_address_patch(&mut address, &patch, Utc::now());

        assert_eq!(address.street, "Updated Street");
        assert_eq!(address.city, "Updated City");
        assert_eq!(address.state, "IL");
        assert_eq!(address.zip_code, "62701");
        assert_eq!(address.country, "USA");
    }
}
