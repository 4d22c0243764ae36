use {
    pollcast_nodes::ExecutionContext,
    serde::{Deserialize, Serialize},
};

/// Poll kind accepted by the Telegram `sendPoll` method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollType {
    #[default]
    Regular,
    Quiz,
}

impl PollType {
    /// Parse the host-configured value. Anything unrecognized (including
    /// the empty string of an unset field) falls back to the default.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "quiz" => Self::Quiz,
            _ => Self::Regular,
        }
    }
}

/// The five per-item parameters declared by the node's configuration
/// surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollParams {
    pub chat_id: String,
    pub question: String,
    /// Comma-delimited option list, split at request-build time.
    pub options: String,
    pub poll_type: PollType,
    pub is_anonymous: bool,
}

impl PollParams {
    /// Read the declared fields for one input item. Missing required
    /// fields come back empty — the host's parameter resolution enforces
    /// them before execution reaches the node.
    #[must_use]
    pub fn from_item(ctx: &ExecutionContext<'_>, index: usize) -> Self {
        Self {
            chat_id: ctx.string_parameter("chatId", index),
            question: ctx.string_parameter("question", index),
            options: ctx.string_parameter("options", index),
            poll_type: PollType::parse(&ctx.string_parameter("pollType", index)),
            is_anonymous: ctx.bool_parameter("isAnonymous", index, true),
        }
    }
}
