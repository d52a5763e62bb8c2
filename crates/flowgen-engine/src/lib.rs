//! Workflow ordering and description engine.
//!
//! A workflow is a directed graph of `Node`s connected by `Connection`s.
//! [`resolve`] turns any such graph, cyclic or disconnected, into a total
//! execution order. [`describe`] walks that order and renders the numbered
//! step list plus a data-flow section. Both are pure and never fail.

mod describe;
mod index;
mod order;
mod prompt;

pub use describe::{describe, EMPTY_WORKFLOW};
pub use index::NodeIndex;
pub use order::resolve;
pub use prompt::{build_codegen_prompt, codegen_system_prompt, CODEGEN_SYSTEM_PROMPT};
