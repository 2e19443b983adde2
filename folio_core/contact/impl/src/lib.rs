use std::sync::Arc;

use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_di::Build;
use folio_email_contracts::{Email, EmailService};
use folio_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use folio_templates_contracts::{ContactMessageTemplate, TemplateService};

const SUBJECT_PREFIX: &str = "Contacto desde la web: ";

#[derive(Debug, Clone, Build)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub email: Arc<EmailAddressWithName>,
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        // Subject resolution happens before any formatting; absent fields are
        // substituted as empty strings, never rejected.
        let subject = submission.resolved_subject().to_owned();
        let name = submission.name.as_deref().unwrap_or_default();
        let sender = submission.email.as_deref().unwrap_or_default();
        let message = submission.message.as_deref().unwrap_or_default();

        let body = format!("De: {name} <{sender}>\nAsunto: {subject}.\nMensaje:\n{message}");
        let html = self.template.render(&ContactMessageTemplate {
            name: name.into(),
            email: sender.into(),
            subject: subject.clone(),
            message: message.into(),
        })?;

        let email = Email {
            recipient: (*self.config.email).clone(),
            subject: format!("{SUBJECT_PREFIX}{subject}"),
            body,
            html_alternative: Some(html),
            reply_to: submission.email.clone(),
        };

        if !self.email.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}
