//! Telegram notifier.
//!
//! Provides the [`TelegramNotifier`], which queues notifications on a channel
//! and delivers them from a background worker. Each notification is sent to
//! the chat identified by its subscriber id.
//!
//! Requires the `telegram` feature to be enabled.

use parking_lot::Mutex;
use teloxide::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::port::outbound::notifier::{Notification, Notifier};

use super::format::format_notification;

/// Telegram notifier that sends messages to subscriber chats.
///
/// Implements the [`Notifier`] trait. Delivery failures are logged and
/// dropped; they are never retried. Call [`TelegramNotifier::close`] before
/// exiting so queued messages are delivered.
pub struct TelegramNotifier {
    /// Channel sender for queuing outbound notifications. `None` once closed.
    sender: Mutex<Option<mpsc::UnboundedSender<Notification>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier and spawn the background worker.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        // Spawn background task to handle outbound notifications.
        let worker = tokio::spawn(telegram_worker(bot, receiver));

        Self {
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Stop accepting notifications and wait until the queue is delivered.
    ///
    /// Later calls return immediately.
    pub async fn close(&self) {
        drop(self.sender.lock().take());
        let worker = self.worker.lock().take();
        if let Some(worker) = worker {
            if let Err(e) = worker.await {
                error!(error = %e, "Telegram notifier worker failed");
            }
        }
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, notification: Notification) {
        let sender = self.sender.lock();
        let queued = sender
            .as_ref()
            .is_some_and(|sender| sender.send(notification).is_ok());
        if !queued {
            warn!("Telegram notifier channel closed");
        }
    }
}

/// Background worker that sends Telegram messages until the channel closes
/// and the queue is empty.
async fn telegram_worker(bot: Bot, mut receiver: mpsc::UnboundedReceiver<Notification>) {
    info!("Telegram notifier started");

    while let Some(notification) = receiver.recv().await {
        let chat_id = ChatId(notification.subscriber.get());
        let text = format_notification(&notification.kind);

        match bot.send_message(chat_id, text).await {
            Ok(_) => debug!(chat_id = chat_id.0, "Notification delivered"),
            Err(e) => error!(chat_id = chat_id.0, error = %e, "Failed to send Telegram message"),
        }
    }

    info!("Telegram notifier drained");
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::domain::{SubscriberId, TargetConfirmations, TransactionId};
    use crate::port::outbound::notifier::NotificationKind;

    fn bot_for(server: &MockServer) -> Bot {
        let api_url = url::Url::parse(&server.uri()).unwrap();
        Bot::new("123:test").set_api_url(api_url)
    }

    #[tokio::test]
    async fn close_delivers_queued_notifications() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: test server"
            })))
            .mount(&server)
            .await;

        let notifier = TelegramNotifier::new(bot_for(&server));
        let tx = TransactionId::new("ab".repeat(32));
        let subscriber = SubscriberId::new(42);
        notifier.notify(Notification::new(
            subscriber,
            NotificationKind::TargetReached {
                transaction_id: tx.clone(),
                target: TargetConfirmations::new(2).unwrap(),
                confirmations: 2,
            },
        ));
        notifier.notify(Notification::new(
            subscriber,
            NotificationKind::TrackingEnded { transaction_id: tx },
        ));

        notifier.close().await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn notify_after_close_is_dropped() {
        let server = MockServer::start().await;
        let notifier = TelegramNotifier::new(bot_for(&server));

        notifier.close().await;
        notifier.notify(Notification::new(
            SubscriberId::new(1),
            NotificationKind::TrackingEnded {
                transaction_id: TransactionId::new("ab".repeat(32)),
            },
        ));
        notifier.close().await;

        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
