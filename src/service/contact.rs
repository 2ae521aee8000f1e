//! Contact form intake

use crate::domain::{ContactMessage, SubmitContactInput};
use crate::email::ContactNotifier;
use crate::error::Result;
use crate::repository::ContactRepository;
use std::sync::Arc;
use validator::Validate;

pub struct ContactService<R: ContactRepository, N: ContactNotifier> {
    contacts: Arc<R>,
    notifier: Arc<N>,
}

impl<R: ContactRepository, N: ContactNotifier> ContactService<R, N> {
    pub fn new(contacts: Arc<R>, notifier: Arc<N>) -> Self {
        Self { contacts, notifier }
    }

    /// Persist a contact message, then notify the site mailbox.
    ///
    /// Notification is best-effort: the message is already saved, so a
    /// delivery failure is logged and the submission still succeeds.
    pub async fn submit(&self, input: SubmitContactInput) -> Result<ContactMessage> {
        input.validate()?;

        let saved = self.contacts.create(&input).await?;

        if let Err(err) = self
            .notifier
            .notify_contact(&saved.name, &saved.email, &saved.message)
            .await
        {
            tracing::warn!(error = %err, "contact notification email failed");
        }

        Ok(saved)
    }
}
