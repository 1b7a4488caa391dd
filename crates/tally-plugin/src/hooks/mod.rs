//! Hook system — lifecycle hook points, dangler registry, and dispatcher.

pub mod definitions;
pub mod dispatcher;
pub mod registry;

pub use definitions::HookPoint;
pub use dispatcher::HookDispatcher;
pub use registry::{DanglerId, HookRegistry};
