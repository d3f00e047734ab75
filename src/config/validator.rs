use crate::error::{AppError, Result};

use super::Config;

/// Validate a resolved config and surface every problem at once.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    validate_api(config, &mut issues);
    validate_backup(config, &mut issues);

    if config.app_id == 0 {
        issues.push("app_id must be a non-zero Steam application id".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_api(config: &Config, issues: &mut Vec<String>) {
    let base = config.api.base_url.trim();
    if base.is_empty() {
        issues.push("api.base_url must not be empty".to_string());
    } else if !(base.starts_with("http://") || base.starts_with("https://")) {
        issues.push(format!(
            "api.base_url must start with http:// or https://, found `{base}`"
        ));
    }

    if config.api.timeout.is_zero() {
        issues.push("api.timeout_secs must be greater than zero".to_string());
    }
}

fn validate_backup(config: &Config, issues: &mut Vec<String>) {
    let name = config.backup.file_name.trim();
    if name.is_empty() {
        issues.push("backup.file_name must not be empty".to_string());
    } else if name.contains(['/', '\\']) {
        issues.push(format!(
            "backup.file_name must be a bare file name, found `{name}`"
        ));
    }
}
