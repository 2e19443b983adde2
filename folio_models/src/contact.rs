/// Sentinel subject value indicating that the free-text `other_subject`
/// field carries the actual subject.
pub const OTHER_SUBJECT_SENTINEL: &str = "Otro";

/// One inbound contact-form submission.
///
/// Every field is optional: absent fields are substituted as empty strings
/// during composition, never rejected. The submitter email is passed through
/// verbatim; address validation is left to the mail transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub other_subject: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    /// The subject actually used for rendering: `other_subject` when the raw
    /// subject equals [`OTHER_SUBJECT_SENTINEL`], the raw subject otherwise.
    /// Absent values resolve to the empty string.
    pub fn resolved_subject(&self) -> &str {
        match self.subject.as_deref() {
            Some(OTHER_SUBJECT_SENTINEL) => self.other_subject.as_deref().unwrap_or_default(),
            Some(subject) => subject,
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_subject_literal() {
        let submission = ContactSubmission {
            subject: Some("Consulta".into()),
            other_subject: Some("ignored".into()),
            ..Default::default()
        };

        assert_eq!(submission.resolved_subject(), "Consulta");
    }

    #[test]
    fn resolved_subject_sentinel() {
        let submission = ContactSubmission {
            subject: Some("Otro".into()),
            other_subject: Some("Colaboración".into()),
            ..Default::default()
        };

        assert_eq!(submission.resolved_subject(), "Colaboración");
    }

    #[test]
    fn resolved_subject_sentinel_without_other_subject() {
        let submission = ContactSubmission {
            subject: Some("Otro".into()),
            ..Default::default()
        };

        assert_eq!(submission.resolved_subject(), "");
    }

    #[test]
    fn resolved_subject_absent() {
        assert_eq!(ContactSubmission::default().resolved_subject(), "");
    }
}
