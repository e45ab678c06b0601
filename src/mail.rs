//! SMTP delivery glue
//!
//! Submits the rendered report to one recipient as a multipart/alternative
//! message (plain text plus HTML) over implicit TLS. A delivery failure is
//! reported to the caller, never retried here.

use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::SmtpSettings;
use crate::error::BriefResult;

/// Mail submission handle for one configured sender/recipient pair
#[derive(Debug)]
pub struct Mailer {
    settings: SmtpSettings,
}

impl Mailer {
    /// Create a mailer, validating that the settings are complete
    pub fn new(settings: &SmtpSettings) -> BriefResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings: settings.clone(),
        })
    }

    /// Send a report email with both plain-text and HTML bodies
    pub fn send(&self, subject: &str, text_body: String, html_body: String) -> BriefResult<()> {
        let message = self.build_message(subject, text_body, html_body)?;

        let credentials = Credentials::new(
            self.settings.sender.clone(),
            self.settings.password.clone().unwrap_or_default(),
        );

        let transport = SmtpTransport::relay(&self.settings.server)?
            .port(self.settings.port)
            .credentials(credentials)
            .build();

        transport.send(&message)?;
        info!("Report email sent to {}", self.settings.recipient);
        Ok(())
    }

    /// Build the outgoing message without sending it
    fn build_message(
        &self,
        subject: &str,
        text_body: String,
        html_body: String,
    ) -> BriefResult<Message> {
        let message = Message::builder()
            .from(self.settings.sender.parse()?)
            .to(self.settings.recipient.parse()?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(text_body, html_body))?;

        Ok(message)
    }
}
