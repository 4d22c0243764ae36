use async_trait::async_trait;

use crate::{
    context::{ExecutionContext, OutputItem},
    descriptor::NodeDescriptor,
    error::Result,
};

/// Core integration-node trait. Each third-party integration implements
/// this; the host owns registration, lifecycle, and presentation.
#[async_trait]
pub trait NodePlugin: Send + Sync {
    /// Node identifier (e.g. "telegramPoll").
    fn id(&self) -> &str;

    /// Human-readable node name.
    fn name(&self) -> &str;

    /// Declarative configuration surface for the host UI.
    fn descriptor(&self) -> NodeDescriptor;

    /// Process one batch of input items, strictly sequentially and in
    /// input order. Each success contributes exactly one output item; the
    /// first failure aborts the run and no partial output is returned.
    async fn execute(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<OutputItem>>;
}
