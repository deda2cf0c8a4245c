use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Transport seam so message building can be tested without an SMTP server.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from: &str) -> Self {
        Self {
            mailer,
            from: from.to_string(),
        }
    }

    /// Authenticated TLS relay (production).
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from: &str,
    ) -> Result<Self, EmailSendError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailSendError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from))
    }

    // Plain SMTP for Mailpit/MailHog in dev and test
    pub fn new_local(host: &str, port: u16, from: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from)
    }

    fn build_message(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<Message, EmailSendError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("from '{}': {}", self.from, e)))?;
        let to: Mailbox = to
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("to '{}': {}", to, e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| EmailSendError::Build(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        let message = self.build_message(to, subject, html_body)?;

        self.mailer
            .send(message)
            .await
            .map_err(EmailSendError::Transport)
    }
}
