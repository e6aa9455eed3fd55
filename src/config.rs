use std::env;

const WEBHOOK_URL_VAR: &str = "DISCORD_WEBHOOK_URL";

/// Process-wide configuration, read once at startup and injected into the
/// handler. An empty webhook URL counts as unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config::new(env::var(WEBHOOK_URL_VAR).ok())
    }

    pub fn new(webhook_url: Option<String>) -> Self {
        Config {
            webhook_url: webhook_url.filter(|url| !url.is_empty()),
        }
    }

    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    #[test]
    fn test_webhook_url_set() {
        let config = Config::new(Some("https://discord.com/api/webhooks/1/a".to_string()));
        assert_eq!(
            config.webhook_url(),
            Some("https://discord.com/api/webhooks/1/a")
        );
    }

    #[test]
    fn test_webhook_url_unset() {
        let config = Config::new(None);
        assert_eq!(config.webhook_url(), None);
    }

    #[test]
    fn test_empty_webhook_url_counts_as_unset() {
        let config = Config::new(Some(String::new()));
        assert_eq!(config.webhook_url(), None);
    }
}
