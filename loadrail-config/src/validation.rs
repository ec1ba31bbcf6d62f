//! Validation support for configuration domains

use crate::error::{ConfigError, ConfigResult};

/// Implemented by every configuration domain
pub trait Validatable {
    /// Check the domain's settings, returning the first violation found
    fn validate(&self) -> ConfigResult<()>;

    /// Domain name used in error reporting
    fn domain_name(&self) -> &'static str;

    /// Build a validation error attributed to this domain
    fn validation_error(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::DomainError {
            domain: self.domain_name().to_string(),
            message: message.into(),
        }
    }
}

/// Reject empty string fields
pub fn validate_required_string(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must not be empty", field_name),
        });
    }
    Ok(())
}

/// Reject values the `url` crate cannot parse
pub fn validate_url(url: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if url.is_empty() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must not be empty", field_name),
        });
    }

    url::Url::parse(url).map_err(|e| ConfigError::DomainError {
        domain: domain.to_string(),
        message: format!("{} is not a valid URL: {}", field_name, e),
    })?;

    Ok(())
}

/// Reject values outside a fixed set of choices, case-insensitively
pub fn validate_enum_choice<T>(
    value: &str,
    valid_choices: &[T],
    field_name: &str,
    domain: &str,
) -> ConfigResult<()>
where
    T: AsRef<str>,
{
    if valid_choices
        .iter()
        .any(|choice| choice.as_ref().eq_ignore_ascii_case(value))
    {
        return Ok(());
    }

    let choices: Vec<&str> = valid_choices.iter().map(|c| c.as_ref()).collect();
    Err(ConfigError::DomainError {
        domain: domain.to_string(),
        message: format!(
            "{} must be one of {}, got '{}'",
            field_name,
            choices.join(", "),
            value
        ),
    })
}

/// Reject port 0 and warn about ports in the reserved range
pub fn validate_port_range(port: u16, field_name: &str, domain: &str) -> ConfigResult<()> {
    if port == 0 {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must not be 0", field_name),
        });
    }

    if port <= 1023 {
        tracing::warn!("{} {} falls in the reserved range below 1024", field_name, port);
    }

    Ok(())
}
