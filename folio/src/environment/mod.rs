use std::sync::Arc;

use folio_config::Config;
use folio_core_contact_impl::ContactServiceConfig;
use folio_core_health_impl::HealthServiceConfig;
use folio_di::provider;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            ContactServiceConfig,
            HealthServiceConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        contact_service_config: ContactServiceConfig,
        health_service_config: HealthServiceConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let contact_service_config = ContactServiceConfig {
            email: Arc::new(config.contact.email.clone()),
        };

        let health_service_config = HealthServiceConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Self {
            _cache: Default::default(),
            contact_service_config,
            health_service_config,
        }
    }
}
