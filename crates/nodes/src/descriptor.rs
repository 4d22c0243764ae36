use {
    serde::Serialize,
    serde_json::{Value, json},
};

/// Declarative node metadata consumed by the host UI (labels, field kinds,
/// defaults). Pure presentation data — nothing here participates in
/// execution.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub display_name: String,
    pub name: String,
    pub group: Vec<String>,
    pub version: String,
    pub description: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub credentials: Vec<CredentialRequirement>,
    pub properties: Vec<NodeProperty>,
}

/// A credential type the node needs the host to resolve.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialRequirement {
    pub name: String,
    pub required: bool,
}

/// UI field kind for a node property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    String,
    Boolean,
    Options,
}

/// One selectable value for an `Options` property.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
}

/// One configuration field exposed to the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub default: Value,
    pub required: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
}

impl NodeProperty {
    #[must_use]
    pub fn string(
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind: PropertyKind::String,
            default: json!(""),
            required: false,
            description: description.into(),
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn boolean(
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        default: bool,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind: PropertyKind::Boolean,
            default: json!(default),
            required: false,
            description: description.into(),
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(
        name: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        options: Vec<PropertyOption>,
        default: &str,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind: PropertyKind::Options,
            default: json!(default),
            required: false,
            description: description.into(),
            options,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
