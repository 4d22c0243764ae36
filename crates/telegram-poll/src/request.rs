use serde::Serialize;

use crate::params::{PollParams, PollType};

/// Wire body for the Telegram `sendPoll` method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendPollRequest {
    pub chat_id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "type")]
    pub poll_type: PollType,
    pub is_anonymous: bool,
}

impl SendPollRequest {
    /// Pure mapping from extracted parameters to the wire shape.
    #[must_use]
    pub fn from_params(params: &PollParams) -> Self {
        Self {
            chat_id: params.chat_id.clone(),
            question: params.question.clone(),
            options: split_options(&params.options),
            poll_type: params.poll_type,
            is_anonymous: params.is_anonymous,
        }
    }
}

/// Split a comma-delimited option string, trimming surrounding whitespace
/// from each piece. Order is preserved; duplicates and empty entries
/// (leading/trailing commas, or an entirely empty string) are passed
/// through unchanged — the remote API's own validation is authoritative.
#[must_use]
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split(',').map(|opt| opt.trim().to_string()).collect()
}

/// Production Bot API host.
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// `sendPoll` endpoint for a given API base and bot token.
#[must_use]
pub fn send_poll_url(api_base: &str, token: &str) -> String {
    format!("{api_base}/bot{token}/sendPoll")
}
