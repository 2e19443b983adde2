use folio_core_contact_impl::ContactServiceImpl;
use folio_core_health_impl::HealthServiceImpl;
use folio_email_impl::EmailServiceImpl;
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<Health, Contact>;

// Email
pub type Email = EmailServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Core
pub type Health = HealthServiceImpl<Email>;
pub type Contact = ContactServiceImpl<Email, Template>;
