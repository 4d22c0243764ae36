use {serde::Serialize, serde_json::Value};

use crate::{
    capability::{Credentials, CredentialsProvider, HttpRequest, HttpRequester},
    error::Result,
};

/// One unit of work in a batch, carrying the parameters the host already
/// resolved for this node. Immutable; discarded after producing one output.
#[derive(Debug, Clone)]
pub struct InputItem {
    parameters: Value,
}

impl InputItem {
    #[must_use]
    pub fn new(parameters: Value) -> Self {
        Self { parameters }
    }

    /// Raw parameter value, if the host resolved one.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }
}

/// One output record: a raw decoded response, forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputItem {
    pub json: Value,
}

impl OutputItem {
    #[must_use]
    pub fn new(json: Value) -> Self {
        Self { json }
    }
}

/// Everything the host hands a node for one batch execution: the ordered
/// input items plus the credential-lookup and HTTP capabilities. Nodes
/// receive capabilities through this seam instead of ambient context so
/// tests can substitute doubles.
pub struct ExecutionContext<'a> {
    items: &'a [InputItem],
    credentials: &'a dyn CredentialsProvider,
    http: &'a dyn HttpRequester,
}

impl<'a> ExecutionContext<'a> {
    #[must_use]
    pub fn new(
        items: &'a [InputItem],
        credentials: &'a dyn CredentialsProvider,
        http: &'a dyn HttpRequester,
    ) -> Self {
        Self {
            items,
            credentials,
            http,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[InputItem] {
        self.items
    }

    /// Resolve credentials by credential-type name.
    pub async fn credentials(&self, credential_type: &str) -> Result<Option<Credentials>> {
        self.credentials.resolve(credential_type).await
    }

    /// Issue one HTTP request through the host capability.
    pub async fn request_json(&self, request: HttpRequest) -> Result<Value> {
        self.http.request_json(request).await
    }

    /// String parameter for one item, with coercion. Missing or null
    /// values yield the empty string; enforcing required fields is the
    /// host's parameter-resolution job, not the node's.
    #[must_use]
    pub fn string_parameter(&self, name: &str, index: usize) -> String {
        match self.raw(name, index) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Boolean parameter for one item, with a configured default.
    #[must_use]
    pub fn bool_parameter(&self, name: &str, index: usize, default: bool) -> bool {
        match self.raw(name, index) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    fn raw(&self, name: &str, index: usize) -> Option<&Value> {
        self.items.get(index).and_then(|item| item.parameter(name))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::error::Error, async_trait::async_trait, serde_json::json};

    struct NoCredentials;

    #[async_trait]
    impl CredentialsProvider for NoCredentials {
        async fn resolve(&self, _credential_type: &str) -> Result<Option<Credentials>> {
            Ok(None)
        }
    }

    struct NoHttp;

    #[async_trait]
    impl HttpRequester for NoHttp {
        async fn request_json(&self, _request: HttpRequest) -> Result<Value> {
            Err(Error::operation(
                "no http in this test",
                std::io::Error::other("unreachable"),
            ))
        }
    }

    fn context_over(items: &[InputItem]) -> ExecutionContext<'_> {
        ExecutionContext::new(items, &NoCredentials, &NoHttp)
    }

    #[test]
    fn string_parameter_reads_and_coerces() {
        let items = vec![InputItem::new(json!({
            "chatId": "-100123",
            "numericChat": 42,
            "flag": true,
        }))];
        let ctx = context_over(&items);
        assert_eq!(ctx.string_parameter("chatId", 0), "-100123");
        assert_eq!(ctx.string_parameter("numericChat", 0), "42");
        assert_eq!(ctx.string_parameter("flag", 0), "true");
    }

    #[test]
    fn missing_or_null_string_parameter_is_empty() {
        let items = vec![InputItem::new(json!({"question": null}))];
        let ctx = context_over(&items);
        assert_eq!(ctx.string_parameter("question", 0), "");
        assert_eq!(ctx.string_parameter("absent", 0), "");
        // Out-of-range index behaves like a missing field.
        assert_eq!(ctx.string_parameter("question", 5), "");
    }

    #[test]
    fn bool_parameter_falls_back_to_default() {
        let items = vec![InputItem::new(json!({"isAnonymous": false}))];
        let ctx = context_over(&items);
        assert!(!ctx.bool_parameter("isAnonymous", 0, true));
        assert!(ctx.bool_parameter("absent", 0, true));
        assert!(!ctx.bool_parameter("absent", 0, false));
    }
}
