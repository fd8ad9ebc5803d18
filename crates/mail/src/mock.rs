use async_trait::async_trait;
use mockall::mock;

use crate::{EmailMessage, MailError, Notifier};

// Mock notifier for testing
mock! {
    pub Notifier {}

    #[async_trait]
    impl Notifier for Notifier {
        async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
    }
}
