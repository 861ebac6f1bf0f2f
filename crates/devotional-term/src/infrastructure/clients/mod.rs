use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use devotional_client::DevotionalApiBox;
use devotional_client::DevotionalClientFactory;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub struct ApiClientManager {}

impl ApiClientManager {
    /// Build the service client from the loaded configuration.
    pub fn get() -> Result<DevotionalApiBox> {
        let server_url = Config::get(ConfigKey::ServerUrl);
        if server_url.is_empty() {
            bail!("No devotional service configured, set server-url");
        }

        let timeout = Config::get(ConfigKey::RequestTimeout);
        let timeout = if timeout.is_empty() {
            None
        } else {
            Some(Duration::from_millis(timeout.parse::<u64>()?))
        };

        return Ok(DevotionalClientFactory::create_http_client(server_url, timeout));
    }
}
