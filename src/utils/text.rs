use crate::error::{AppError, Result};

/// Accept either a bare Workshop id or a `...filedetails/?id=<digits>` URL.
pub fn parse_collection_id(input: &str) -> Result<String> {
    let trimmed = input.trim();

    if is_workshop_id(trimmed) {
        return Ok(trimmed.to_string());
    }

    let query = trimmed.split_once('?').map(|(_, query)| query).unwrap_or("");
    let from_query = query
        .split(['&', '#'])
        .filter_map(|pair| pair.strip_prefix("id="))
        .find(|value| is_workshop_id(value));

    match from_query {
        Some(id) => Ok(id.to_string()),
        None => Err(AppError::Validation(format!(
            "`{trimmed}` is not a Workshop collection id or URL"
        ))),
    }
}

fn is_workshop_id(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
