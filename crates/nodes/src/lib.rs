//! Integration-node plugin surface.
//!
//! A node implements `NodePlugin` against host-injected capabilities
//! (credential lookup, HTTP) and returns ordered output items. Credential
//! storage, plugin registration, and UI rendering stay with the host; this
//! crate only defines the seam between the two.

pub mod capability;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod http;
pub mod plugin;

pub use {
    capability::{Credentials, CredentialsProvider, HttpMethod, HttpRequest, HttpRequester},
    context::{ExecutionContext, InputItem, OutputItem},
    descriptor::{
        CredentialRequirement, NodeDescriptor, NodeProperty, PropertyKind, PropertyOption,
    },
    error::{Error, Result},
    http::ReqwestRequester,
    plugin::NodePlugin,
};
