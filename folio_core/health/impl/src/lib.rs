use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use folio_core_health_contracts::{HealthService, HealthStatus};
use folio_di::Build;
use folio_email_contracts::EmailService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthServiceImpl<Email> {
    email: Email,
    config: HealthServiceConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthServiceConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Email> HealthService for HealthServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| c.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| c.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }

        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err}"))
            .is_ok();

        let status = HealthStatus { email };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: Instant::now(),
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use folio_email_contracts::MockEmailService;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let email = MockEmailService::new().with_ping(true);

        let sut = HealthServiceImpl {
            email,
            config: HealthServiceConfig {
                cache_ttl: Duration::from_secs(30),
            },
            state: Default::default(),
        };

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { email: true });
    }

    #[tokio::test]
    async fn unreachable() {
        // Arrange
        let email = MockEmailService::new().with_ping(false);

        let sut = HealthServiceImpl {
            email,
            config: HealthServiceConfig {
                cache_ttl: Duration::from_secs(30),
            },
            state: Default::default(),
        };

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { email: false });
    }

    #[tokio::test]
    async fn cached() {
        // Arrange
        let email = MockEmailService::new().with_ping(true);

        let sut = HealthServiceImpl {
            email,
            config: HealthServiceConfig {
                cache_ttl: Duration::from_secs(30),
            },
            state: Default::default(),
        };

        // Act
        let first = sut.get_status().await;
        // The mock expects exactly one ping, so a second ping would panic.
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
    }
}
