//! Telegram poll node.
//!
//! Implements `NodePlugin` by forwarding poll-creation requests to the
//! Telegram Bot API `sendPoll` method through the host-injected credential
//! and HTTP capabilities. One outbound call per input item, strictly
//! sequential, first failure aborts the batch.

pub mod node;
pub mod params;
pub mod request;

pub use {
    node::{CREDENTIAL_TYPE, TelegramPollNode},
    params::{PollParams, PollType},
    request::{SendPollRequest, TELEGRAM_API_BASE, send_poll_url, split_options},
};
