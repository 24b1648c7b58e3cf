//! Best-effort SMTP notification adapter. A send failure never blocks or
//! fails the workflow transition that triggered it.

use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::warn;

use crate::config::SmtpConfig;

#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl Mailer {
    pub fn from_config(cfg: &SmtpConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)?
            .credentials(Credentials::new(cfg.username.clone(), cfg.password.clone()))
            .port(cfg.port)
            .build();

        Ok(Self {
            transport,
            from: cfg.from.clone(),
        })
    }

    pub async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .body(body.to_string())?;

        self.transport.send(message).await?;
        Ok(())
    }
}

/// Fire-and-forget delivery off the request path. Missing configuration or
/// recipient just logs; so does a transport failure.
pub fn notify_best_effort(
    mailer: Option<Mailer>,
    recipient: Option<String>,
    subject: String,
    body: String,
) {
    let Some(mailer) = mailer else {
        warn!(%subject, "SMTP not configured; notification dropped");
        return;
    };
    let Some(recipient) = recipient else {
        warn!(%subject, "no recipient address on record; notification dropped");
        return;
    };

    actix_web::rt::spawn(async move {
        if let Err(e) = mailer.send(&recipient, &subject, &body).await {
            warn!(error = %e, %recipient, "failed to send notification mail");
        }
    });
}
