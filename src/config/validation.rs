use crate::config::Config;
use crate::error::AppError;
use std::net::SocketAddr;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must look like a URL or domain name
/// - HTTP timeout, cache TTL and cache capacity must be positive
/// - Listen address must parse as a socket address
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
///
/// An empty API key is accepted; upstream calls then fail and resolve to
/// empty results.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_base_url(&config.api_base_url)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be greater than zero seconds",
        ));
    }

    if config.cache_ttl_seconds == 0 {
        return Err(AppError::config_error(
            "Cache TTL must be greater than zero seconds",
        ));
    }

    if config.cache_max_entries == 0 {
        return Err(AppError::config_error(
            "Cache capacity must allow at least one entry",
        ));
    }

    config.listen_addr.parse::<SocketAddr>().map_err(|e| {
        AppError::config_error(format!(
            "Invalid listen address '{}': {e}",
            config.listen_addr
        ))
    })?;

    if let Some(log_path) = &config.log_file_path {
        validate_log_path(log_path)?;
    }

    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<(), AppError> {
    if base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !base_url.contains('.') && !base_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "API base URL must be a valid URL or domain name",
            ));
        }
    }

    Ok(())
}

fn validate_log_path(log_path: &str) -> Result<(), AppError> {
    if log_path.is_empty() {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    if let Some(parent) = Path::new(log_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config_error(format!(
                "Cannot create log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}
