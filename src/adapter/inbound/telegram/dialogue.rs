//! Per-chat conversation that collects a tracking request.
//!
//! `/start` asks for a transaction hash, then for a confirmation target.
//! Invalid input re-prompts without leaving the current step. Once both
//! values validate, the chat returns to idle and a [`StartRequest`] is
//! handed to the caller, which forwards it to the registry after the
//! confirmation reply has been sent.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use super::command::{command_help, parse_command, CommandParseError, TelegramCommand};
use crate::application::registry::SubscriptionRegistry;
use crate::domain::{SubscriberId, SubscriptionId, TargetConfirmations, TransactionId};

const PROMPT_TRANSACTION: &str = "Send the hash of the transaction you want to track:";
const PROMPT_CONFIRMATIONS: &str =
    "Enter the number of confirmations (1 to 10) after which you want to be notified:";
const INVALID_TRANSACTION: &str = "Invalid transaction hash. Try again.";
const INVALID_CONFIRMATIONS: &str = "Invalid value. Enter a number from 1 to 10.";
const IDLE_HINT: &str = "Send /start to track a transaction.";

/// Where a chat is in the tracking dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingTransaction,
    AwaitingConfirmations {
        transaction_id: TransactionId,
    },
}

/// Validated input ready to be handed to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    pub transaction_id: TransactionId,
    pub target: TargetConfirmations,
}

/// Result of feeding one plain-text message to the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ConversationState,
    pub replies: Vec<String>,
    pub start: Option<StartRequest>,
}

impl Transition {
    fn stay(state: &ConversationState, reply: &str) -> Self {
        Self {
            state: state.clone(),
            replies: vec![reply.to_string()],
            start: None,
        }
    }
}

/// Advance the dialogue with a non-command message.
#[must_use]
pub fn advance(state: &ConversationState, text: &str) -> Transition {
    match state {
        ConversationState::Idle => Transition::stay(state, IDLE_HINT),
        ConversationState::AwaitingTransaction => match TransactionId::parse(text) {
            Ok(transaction_id) => Transition {
                state: ConversationState::AwaitingConfirmations { transaction_id },
                replies: vec![PROMPT_CONFIRMATIONS.to_string()],
                start: None,
            },
            Err(err) => {
                debug!(error = %err, "Rejected transaction hash");
                Transition::stay(state, INVALID_TRANSACTION)
            }
        },
        ConversationState::AwaitingConfirmations { transaction_id } => {
            match TargetConfirmations::parse(text) {
                Ok(target) => Transition {
                    state: ConversationState::Idle,
                    replies: vec![format!(
                        "I started tracking transaction {transaction_id}. \
                        I will notify you when it reaches {target} confirmations."
                    )],
                    start: Some(StartRequest {
                        transaction_id: transaction_id.clone(),
                        target,
                    }),
                },
                Err(err) => {
                    debug!(error = %err, "Rejected confirmation target");
                    Transition::stay(state, INVALID_CONFIRMATIONS)
                }
            }
        }
    }
}

/// Replies for one inbound message plus an optional tracking request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub messages: Vec<String>,
    pub start: Option<StartRequest>,
}

impl Reply {
    fn text(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            start: None,
        }
    }
}

/// Chat-framework-independent frontend shared by all chats.
pub struct ChatFrontend {
    registry: SubscriptionRegistry,
    conversations: Mutex<HashMap<SubscriberId, ConversationState>>,
}

impl ChatFrontend {
    #[must_use]
    pub fn new(registry: SubscriptionRegistry) -> Self {
        Self {
            registry,
            conversations: Mutex::new(HashMap::new()),
        }
    }

    /// Handle one inbound text message from `subscriber`.
    ///
    /// The returned [`Reply::start`] is not acted on here; pass it to
    /// [`ChatFrontend::begin`] once the replies are sent.
    pub fn handle_message(&self, subscriber: SubscriberId, text: &str) -> Reply {
        match parse_command(text) {
            Ok(command) => self.handle_command(subscriber, command),
            Err(CommandParseError::NotACommand) => self.handle_input(subscriber, text),
            Err(err) => Reply::text(format!("Invalid command: {err}\n\n{}", command_help())),
        }
    }

    /// Start tracking a validated request, replacing any active one.
    pub fn begin(&self, subscriber: SubscriberId, request: StartRequest) -> SubscriptionId {
        self.registry
            .start(subscriber, request.transaction_id, request.target)
    }

    /// Current dialogue step of a chat.
    #[must_use]
    pub fn state(&self, subscriber: SubscriberId) -> ConversationState {
        self.conversations
            .lock()
            .get(&subscriber)
            .cloned()
            .unwrap_or_default()
    }

    fn handle_command(&self, subscriber: SubscriberId, command: TelegramCommand) -> Reply {
        match command {
            TelegramCommand::Start => {
                self.set_state(subscriber, ConversationState::AwaitingTransaction);
                Reply::text(PROMPT_TRANSACTION)
            }
            TelegramCommand::Stop => {
                self.set_state(subscriber, ConversationState::Idle);
                if self.registry.cancel(subscriber) {
                    Reply::text("Stopped tracking. Send /start to track a new transaction.")
                } else {
                    Reply::text("Nothing is being tracked.")
                }
            }
            TelegramCommand::Status => match self.registry.active_subscription(subscriber) {
                Some((_, transaction_id)) => {
                    Reply::text(format!("Tracking transaction {transaction_id}."))
                }
                None => Reply::text(format!("Nothing is being tracked. {IDLE_HINT}")),
            },
            TelegramCommand::Help => Reply::text(command_help()),
        }
    }

    fn handle_input(&self, subscriber: SubscriberId, text: &str) -> Reply {
        let mut conversations = self.conversations.lock();
        let current = conversations.get(&subscriber).cloned().unwrap_or_default();
        let transition = advance(&current, text);

        if transition.state == ConversationState::Idle {
            conversations.remove(&subscriber);
        } else {
            conversations.insert(subscriber, transition.state);
        }

        Reply {
            messages: transition.replies,
            start: transition.start,
        }
    }

    fn set_state(&self, subscriber: SubscriberId, state: ConversationState) {
        let mut conversations = self.conversations.lock();
        if state == ConversationState::Idle {
            conversations.remove(&subscriber);
        } else {
            conversations.insert(subscriber, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::application::monitor::{ConfirmationMonitor, MonitorSettings};
    use crate::port::outbound::notifier::NullNotifier;
    use crate::testkit::lookup::ScriptedLookup;

    const HASH: &str = "a3f1c2d4e5b6978812ab34cd56ef7890a1b2c3d4e5f60718293a4b5c6d7e8f90";

    fn frontend() -> ChatFrontend {
        let lookup = ScriptedLookup::new().script(HASH, vec![Ok(0)]);
        let monitor = ConfirmationMonitor::new(
            Arc::new(lookup),
            Arc::new(NullNotifier),
            MonitorSettings {
                poll_interval: Duration::from_secs(5),
                transient_retries: 0,
            },
        );
        ChatFrontend::new(SubscriptionRegistry::new(Arc::new(monitor)))
    }

    #[test]
    fn idle_text_gets_hint() {
        let t = advance(&ConversationState::Idle, "hello");
        assert_eq!(t.state, ConversationState::Idle);
        assert_eq!(t.replies, vec![IDLE_HINT.to_string()]);
        assert!(t.start.is_none());
    }

    #[test]
    fn short_hash_is_rejected_without_leaving_step() {
        let t = advance(&ConversationState::AwaitingTransaction, &HASH[..63]);
        assert_eq!(t.state, ConversationState::AwaitingTransaction);
        assert_eq!(t.replies, vec![INVALID_TRANSACTION.to_string()]);
        assert!(t.start.is_none());
    }

    #[test]
    fn valid_hash_moves_to_confirmations() {
        let t = advance(&ConversationState::AwaitingTransaction, HASH);
        assert_eq!(
            t.state,
            ConversationState::AwaitingConfirmations {
                transaction_id: TransactionId::new(HASH)
            }
        );
    }

    #[test]
    fn out_of_range_confirmations_reprompt() {
        let state = ConversationState::AwaitingConfirmations {
            transaction_id: TransactionId::new(HASH),
        };
        for input in ["0", "11", "abc", "-2"] {
            let t = advance(&state, input);
            assert_eq!(t.state, state, "input {input:?}");
            assert_eq!(t.replies, vec![INVALID_CONFIRMATIONS.to_string()]);
            assert!(t.start.is_none());
        }
    }

    #[test]
    fn valid_confirmations_produce_start_request() {
        let state = ConversationState::AwaitingConfirmations {
            transaction_id: TransactionId::new(HASH),
        };
        let t = advance(&state, "3");
        assert_eq!(t.state, ConversationState::Idle);
        assert_eq!(
            t.start,
            Some(StartRequest {
                transaction_id: TransactionId::new(HASH),
                target: TargetConfirmations::new(3).unwrap(),
            })
        );
        assert!(t.replies[0].contains("3 confirmations"));
    }

    #[tokio::test(start_paused = true)]
    async fn full_dialogue_starts_tracking() {
        let frontend = frontend();
        let chat = SubscriberId::new(42);

        let reply = frontend.handle_message(chat, "/start");
        assert_eq!(reply.messages, vec![PROMPT_TRANSACTION.to_string()]);

        let reply = frontend.handle_message(chat, HASH);
        assert_eq!(reply.messages, vec![PROMPT_CONFIRMATIONS.to_string()]);

        let reply = frontend.handle_message(chat, "5");
        let request = reply.start.expect("start request");
        assert_eq!(frontend.state(chat), ConversationState::Idle);

        frontend.begin(chat, request);
        assert!(frontend.registry.is_tracking(chat));

        let status = frontend.handle_message(chat, "/status");
        assert!(status.messages[0].contains(HASH));

        let stop = frontend.handle_message(chat, "/stop");
        assert!(stop.messages[0].starts_with("Stopped tracking"));
        assert!(!frontend.registry.is_tracking(chat));
    }

    #[tokio::test(start_paused = true)]
    async fn start_resets_a_half_finished_dialogue() {
        let frontend = frontend();
        let chat = SubscriberId::new(1);

        frontend.handle_message(chat, "/start");
        frontend.handle_message(chat, HASH);
        frontend.handle_message(chat, "/start");

        assert_eq!(frontend.state(chat), ConversationState::AwaitingTransaction);
    }

    #[tokio::test(start_paused = true)]
    async fn conversations_are_isolated_per_chat() {
        let frontend = frontend();
        frontend.handle_message(SubscriberId::new(1), "/start");

        assert_eq!(
            frontend.state(SubscriberId::new(1)),
            ConversationState::AwaitingTransaction
        );
        assert_eq!(frontend.state(SubscriberId::new(2)), ConversationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_command_returns_help() {
        let frontend = frontend();
        let reply = frontend.handle_message(SubscriberId::new(1), "/pause");
        assert!(reply.messages[0].contains("unknown command `/pause`"));
        assert!(reply.messages[0].contains("/start"));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_without_subscription() {
        let frontend = frontend();
        let reply = frontend.handle_message(SubscriberId::new(9), "/stop");
        assert_eq!(reply.messages, vec!["Nothing is being tracked.".to_string()]);
    }
}
