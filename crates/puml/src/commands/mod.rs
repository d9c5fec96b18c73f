//! CLI command implementations.

pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod render;

pub(crate) use decode::DecodeArgs;
pub(crate) use encode::EncodeArgs;
pub(crate) use render::RenderArgs;
