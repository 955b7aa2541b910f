//! Builds `mailto:` drafts and hands them to the visitor's mail client.
//!
//! Nothing is ever sent from the page itself. A hand-off sets the window
//! location and whatever handler the OS has registered takes over.

use log::info;
use thiserror::Error;
use web_sys::window;

use crate::config;

pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Error, PartialEq)]
pub enum HandoffError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not navigate to mail link: {0}")]
    Navigation(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MailDraft {
    pub recipient: &'static str,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

impl ContactDraft {
    pub fn with_field(&self, field: ContactField, value: String) -> ContactDraft {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Company => next.company = value,
            ContactField::Phone => next.phone = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn to_mail(&self) -> MailDraft {
        let name = or_not_provided(&self.name);
        let email = or_not_provided(&self.email);
        let company = or_not_provided(&self.company);
        let phone = or_not_provided(&self.phone);
        let message = or_not_provided(&self.message);

        let body = format!(
            "Hello Karthikeya,\n\n\
             I'm interested in your digital marketing and web development services.\n\n\
             Contact Details:\n\
             Name: {name}\n\
             Email: {email}\n\
             Company: {company}\n\
             Phone: {phone}\n\n\
             Project Details:\n\
             {message}\n\n\
             Best regards,\n\
             {name}"
        );

        MailDraft {
            recipient: config::CONTACT_RECIPIENT,
            subject: format!("New Project Inquiry from {}", name),
            body,
        }
    }
}

fn or_not_provided(value: &str) -> &str {
    if value.is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}

/// Chat messages go to support. Blank input yields no draft at all.
pub fn chat_mail(message: &str) -> Option<MailDraft> {
    if message.trim().is_empty() {
        return None;
    }
    Some(MailDraft {
        recipient: config::SUPPORT_RECIPIENT,
        subject: config::CHAT_SUBJECT.to_string(),
        body: message.to_string(),
    })
}

pub fn plain_mailto(recipient: &str) -> String {
    format!("mailto:{}", recipient)
}

pub fn hand_off(draft: &MailDraft) -> Result<(), HandoffError> {
    let window = window().ok_or(HandoffError::NoWindow)?;
    info!("Handing off mail draft to {}", draft.recipient);
    window
        .location()
        .set_href(&draft.to_uri())
        .map_err(|e| HandoffError::Navigation(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> ContactDraft {
        ContactDraft {
            name: "Alice".into(),
            email: "a@x.com".into(),
            company: "".into(),
            phone: "".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn contact_body_defaults_missing_fields() {
        let mail = alice().to_mail();
        assert!(mail.body.contains("Name: Alice"));
        assert!(mail.body.contains("Email: a@x.com"));
        assert!(mail.body.contains("Company: Not provided"));
        assert!(mail.body.contains("Phone: Not provided"));
        assert!(mail.body.contains("Project Details:\nHi\n"));
        assert!(mail.body.ends_with("Best regards,\nAlice"));
        assert_eq!(mail.subject, "New Project Inquiry from Alice");
        assert_eq!(mail.recipient, config::CONTACT_RECIPIENT);
    }

    #[test]
    fn contact_body_keeps_template_layout() {
        let mail = alice().to_mail();
        let lines: Vec<&str> = mail.body.lines().collect();
        assert_eq!(lines[0], "Hello Karthikeya,");
        assert_eq!(lines[1], "");
        assert_eq!(lines[4], "Contact Details:");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "Project Details:");
    }

    #[test]
    fn filled_fields_are_copied_verbatim() {
        let draft = alice()
            .with_field(ContactField::Name, "  Alice ".into())
            .with_field(ContactField::Phone, "   ".into());
        let mail = draft.to_mail();
        assert!(mail.body.contains("Name:   Alice \n"), "name was altered: {:?}", mail.body);
        assert!(mail.body.contains("Phone:    \n"));
        assert!(mail.body.ends_with("Best regards,\n  Alice "));
        assert_eq!(mail.subject, "New Project Inquiry from   Alice ");
    }

    #[test]
    fn empty_draft_is_all_placeholders() {
        let mail = ContactDraft::default().to_mail();
        assert_eq!(mail.subject, "New Project Inquiry from Not provided");
        assert_eq!(mail.body.matches(NOT_PROVIDED).count(), 6);
    }

    #[test]
    fn uri_percent_encodes_subject_and_body() {
        let uri = alice().to_mail().to_uri();
        assert!(uri.starts_with("mailto:karthikeya.gsi@gmail.com?subject=New%20Project%20Inquiry%20from%20Alice&body="));
        assert!(uri.contains("Name%3A%20Alice%0AEmail%3A%20a%40x.com"));
        assert!(!uri.contains('\n'));
        assert!(!uri.contains(' '));
    }

    #[test]
    fn chat_ignores_blank_messages() {
        assert_eq!(chat_mail(""), None);
        assert_eq!(chat_mail("  \n\t"), None);
    }

    #[test]
    fn chat_goes_to_support_with_fixed_subject() {
        let mail = chat_mail("help").expect("draft");
        assert_eq!(mail.recipient, config::SUPPORT_RECIPIENT);
        assert_eq!(
            mail.to_uri(),
            "mailto:customerrelations.gsi@gmail.com?subject=Chat%20Inquiry&body=help"
        );
    }

    #[test]
    fn with_field_only_touches_one_field() {
        let draft = ContactDraft::default().with_field(ContactField::Company, "Acme".into());
        assert_eq!(draft.company, "Acme");
        assert!(draft.name.is_empty() && draft.message.is_empty());
    }
}
