use anyhow::Context;
use folio_config::{EmailBackend, EmailConfig};
use folio_email_impl::EmailServiceImpl;

/// Create the outbound email transport selected by the configuration.
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    match config.backend {
        EmailBackend::Console => Ok(EmailServiceImpl::console(config.from.clone())),
        EmailBackend::Smtp => {
            EmailServiceImpl::new(&config.smtp_url, config.from.clone(), config.timeout.into())
                .await
                .context("Failed to connect to SMTP server")
        }
    }
}
