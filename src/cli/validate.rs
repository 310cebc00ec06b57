use folio_contact::{FormFields, ValidationResult};

/// Checks the fields without submitting and prints every collected message.
pub fn validate(fields: &FormFields) -> ValidationResult {
    let result = folio_contact::validate(fields);

    if result.is_valid() {
        println!("valid");
    } else {
        for (field, error) in result.invalid.iter().zip(result.errors.iter()) {
            println!("{field}: {error}");
        }
    }

    tracing::debug!(valid = result.is_valid(), errors = result.errors.len(), "validated");

    result
}
