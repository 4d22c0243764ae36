use {
    async_trait::async_trait,
    secrecy::{ExposeSecret, Secret},
    serde_json::Value,
    tracing::{debug, info},
};

use pollcast_nodes::{
    CredentialRequirement, Error, ExecutionContext, HttpRequest, NodeDescriptor, NodePlugin,
    NodeProperty, OutputItem, PropertyOption, Result,
};

use crate::{
    params::PollParams,
    request::{SendPollRequest, TELEGRAM_API_BASE, send_poll_url},
};

/// Credential type resolved through the host for this node.
pub const CREDENTIAL_TYPE: &str = "telegramApi";

/// Sends a poll to a Telegram chat via the Bot API `sendPoll` method.
///
/// Items are processed strictly sequentially in input order; each success
/// forwards the raw decoded API response as one output item, and the first
/// failure aborts the batch with no partial output.
#[derive(Debug, Clone)]
pub struct TelegramPollNode {
    api_base: String,
}

impl TelegramPollNode {
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_base: TELEGRAM_API_BASE.into(),
        }
    }

    /// Point the node at a different Bot API host (test servers).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

impl Default for TelegramPollNode {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NodePlugin for TelegramPollNode {
    fn id(&self) -> &str {
        "telegramPoll"
    }

    fn name(&self) -> &str {
        "Telegram Poll"
    }

    fn descriptor(&self) -> NodeDescriptor {
        descriptor()
    }

    async fn execute(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<OutputItem>> {
        let mut return_data = Vec::with_capacity(ctx.items().len());

        for index in 0..ctx.items().len() {
            let params = PollParams::from_item(ctx, index);
            let token = resolve_token(ctx).await?;
            let request = SendPollRequest::from_params(&params);

            debug!(
                chat_id = %request.chat_id,
                option_count = request.options.len(),
                "sending telegram poll"
            );

            let response =
                send_poll(ctx, &self.api_base, token.expose_secret(), &request).await?;
            return_data.push(OutputItem::new(response));
        }

        info!(item_count = return_data.len(), "telegram poll batch completed");
        Ok(return_data)
    }
}

/// Resolve the bot token, failing before any HTTP request is attempted
/// when credentials are absent or the token is empty.
async fn resolve_token(ctx: &ExecutionContext<'_>) -> Result<Secret<String>> {
    let Some(credentials) = ctx.credentials(CREDENTIAL_TYPE).await? else {
        return Err(Error::authentication(
            "no Telegram API credentials provided",
        ));
    };
    if credentials.is_empty() {
        return Err(Error::authentication("Telegram API access token is empty"));
    }
    Ok(credentials.access_token)
}

/// Issue one `sendPoll` call and enforce the application-level `ok` check.
/// Failures the capability already typed propagate unchanged.
async fn send_poll(
    ctx: &ExecutionContext<'_>,
    api_base: &str,
    token: &str,
    request: &SendPollRequest,
) -> Result<Value> {
    let body = serde_json::to_value(request)
        .map_err(|e| Error::operation("failed to encode sendPoll request", e))?;

    let response = ctx
        .request_json(HttpRequest::post(send_poll_url(api_base, token), body))
        .await?;

    // Telegram signals application-level failure via `ok`, even on 4xx.
    if !response.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        let description = response
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(Error::api(description));
    }

    Ok(response)
}

/// Declarative configuration surface: the five fields plus the credential
/// requirement. Presentation data for the host UI only.
fn descriptor() -> NodeDescriptor {
    NodeDescriptor {
        display_name: "Telegram Poll".into(),
        name: "telegramPoll".into(),
        group: vec!["transform".into()],
        version: "1.1".into(),
        description: "Sends a poll to a Telegram chat".into(),
        inputs: vec!["main".into()],
        outputs: vec!["main".into()],
        credentials: vec![CredentialRequirement {
            name: CREDENTIAL_TYPE.into(),
            required: true,
        }],
        properties: vec![
            NodeProperty::string(
                "chatId",
                "Chat ID",
                "The ID of the Telegram chat to send the poll to",
            )
            .required(),
            NodeProperty::string("question", "Question", "The question for the poll").required(),
            NodeProperty::string("options", "Options", "Comma-separated list of poll options")
                .required(),
            NodeProperty::options(
                "pollType",
                "Poll Type",
                "Type of poll: regular or quiz",
                vec![
                    PropertyOption {
                        name: "Regular".into(),
                        value: "regular".into(),
                    },
                    PropertyOption {
                        name: "Quiz".into(),
                        value: "quiz".into(),
                    },
                ],
                "regular",
            ),
            NodeProperty::boolean(
                "isAnonymous",
                "Anonymous Poll",
                "Whether the poll should be anonymous",
                true,
            ),
        ],
    }
}
