//! # ShiftManager Mail
//!
//! Notification gateway for the ShiftManager backend. Exposes a single
//! `send` operation behind the [`Notifier`] trait; the production
//! implementation ([`resend::ResendMailer`]) talks to the Resend
//! transactional email API. Delivery guarantees are the provider's
//! concern; a failed dispatch surfaces as a [`MailError`] and is not
//! retried here.

/// Mail error types
pub mod error;
/// Mock notifier for testing
pub mod mock;
/// Resend API client
pub mod resend;
/// Notification email construction
pub mod template;

pub use error::MailError;

use async_trait::async_trait;
use serde::Serialize;

/// A single outbound email, ready to hand to the provider.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Dispatches one email through an external provider.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}
