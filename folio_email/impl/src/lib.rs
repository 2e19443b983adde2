use std::time::Duration;

use anyhow::anyhow;
use folio_email_contracts::{Email, EmailService};
use folio_models::email_address::EmailAddressWithName;
use folio_utils::Apply;
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: Transport,
}

#[derive(Debug, Clone)]
enum Transport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    /// Logs composed messages instead of delivering them.
    Console,
}

impl EmailServiceImpl {
    pub async fn new(
        url: &str,
        from: EmailAddressWithName,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?
            .timeout(Some(timeout))
            .build();

        Ok(Self {
            from,
            transport: Transport::Smtp(transport),
        })
    }

    pub fn console(from: EmailAddressWithName) -> Self {
        Self {
            from,
            transport: Transport::Console,
        }
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let builder = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(
                email.reply_to.as_deref().map(str::parse).transpose()?,
                MessageBuilder::reply_to,
            )
            .subject(email.subject);

        match email.html_alternative {
            Some(html) => {
                builder.multipart(MultiPart::alternative_plain_html(email.body, html))
            }
            None => builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(email.body),
        }
        .map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.build_message(email)?;

        match &self.transport {
            Transport::Smtp(transport) => transport
                .send(message)
                .await
                .map(|response| response.is_positive())
                .map_err(Into::into),
            Transport::Console => {
                tracing::info!(
                    "Outbound email:\n{}",
                    String::from_utf8_lossy(&message.formatted())
                );
                Ok(true)
            }
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match &self.transport {
            Transport::Smtp(transport) => transport
                .test_connection()
                .await?
                .then_some(())
                .ok_or_else(|| anyhow!("Failed to ping smtp server")),
            Transport::Console => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sut() -> EmailServiceImpl {
        EmailServiceImpl::console(
            "No responder <no-responder@example.com>"
                .parse()
                .unwrap(),
        )
    }

    fn email() -> Email {
        Email {
            recipient: "contacto@example.com".parse().unwrap(),
            subject: "The Subject".into(),
            body: "Hello World!".into(),
            html_alternative: Some("<p>Hello World!</p>".into()),
            reply_to: Some("ana@example.com".into()),
        }
    }

    #[tokio::test]
    async fn console_send() {
        let result = sut().send(email()).await.unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn console_send_plain_only() {
        let result = sut()
            .send(Email {
                html_alternative: None,
                reply_to: None,
                ..email()
            })
            .await
            .unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn invalid_reply_to_is_a_transport_error() {
        let result = sut()
            .send(Email {
                reply_to: Some("not an address".into()),
                ..email()
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn console_ping() {
        sut().ping().await.unwrap();
    }
}
