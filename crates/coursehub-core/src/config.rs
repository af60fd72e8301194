/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (field `database_url` reads `DATABASE_URL`)
/// and call `Config::from_env()` at startup.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn try_from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Load from explicit key/value pairs. Used by tests.
    fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }

    /// # Panics
    ///
    /// Panics if any required env var is missing or cannot be deserialized.
    fn from_env() -> Self {
        Self::try_from_env().expect("failed to load config from environment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct SampleConfig {
        database_url: String,
        #[serde(default = "default_port")]
        port: u16,
    }

    fn default_port() -> u16 {
        8080
    }

    impl Config for SampleConfig {}

    #[test]
    fn should_read_upper_case_keys() {
        let config = SampleConfig::from_pairs([
            ("DATABASE_URL".to_owned(), "postgres://db".to_owned()),
            ("PORT".to_owned(), "9000".to_owned()),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://db");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn should_apply_serde_defaults() {
        let config =
            SampleConfig::from_pairs([("DATABASE_URL".to_owned(), "postgres://db".to_owned())])
                .unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn should_fail_when_required_key_missing() {
        assert!(SampleConfig::from_pairs(std::iter::empty()).is_err());
    }
}
