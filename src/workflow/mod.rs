pub mod container_flow;
pub mod parse_ctx;

pub use container_flow::{ContainerFlow, ContainerOutcome, SkipReason};
pub use parse_ctx::ParseCtx;
