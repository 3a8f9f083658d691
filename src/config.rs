use thiserror::Error;

/// Public site configuration, baked into the build from `PUBLIC_*` environment
/// variables. Both values ship to the browser, so nothing here is a secret in
/// any real sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub api_base: Option<&'static str>,
    pub admin_password: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing API base URL")]
    MissingApiBase,
    #[error("Missing admin password")]
    MissingAdminPassword,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("PUBLIC_API_BASE_URL"),
            admin_password: option_env!("PUBLIC_ADMIN_PASSWORD"),
        }
    }

    pub fn api_base(&self) -> Result<&'static str, ConfigError> {
        self.api_base.ok_or(ConfigError::MissingApiBase)
    }

    pub fn admin_password(&self) -> Result<&'static str, ConfigError> {
        self.admin_password.ok_or(ConfigError::MissingAdminPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_are_distinct_errors() {
        let config = SiteConfig {
            api_base: None,
            admin_password: None,
        };
        assert_eq!(config.api_base(), Err(ConfigError::MissingApiBase));
        assert_eq!(
            config.admin_password(),
            Err(ConfigError::MissingAdminPassword)
        );
        assert_eq!(
            ConfigError::MissingAdminPassword.to_string(),
            "Missing admin password"
        );
    }

    #[test]
    fn test_present_values() {
        let config = SiteConfig {
            api_base: Some("http://localhost:8080"),
            admin_password: Some("hunter2"),
        };
        assert_eq!(config.api_base(), Ok("http://localhost:8080"));
        assert_eq!(config.admin_password(), Ok("hunter2"));
    }
}
