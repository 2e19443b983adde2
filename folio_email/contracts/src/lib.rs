use std::future::Future;

use folio_models::email_address::EmailAddressWithName;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Sends the given email, returning whether the transport accepted it.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub body: String,
    /// HTML rendering of `body`, attached as a multipart alternative.
    pub html_alternative: Option<String>,
    /// Submitter-supplied reply address, handed to the transport verbatim.
    /// Parsing happens inside the transport so that a bad address surfaces
    /// as a delivery error.
    pub reply_to: Option<String>,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            let result = if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("Failed to ping smtp server"))
            };
            Box::pin(std::future::ready(result))
        });
        self
    }
}
