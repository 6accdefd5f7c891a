//! 实例信息

pub mod handler;
pub mod model;
pub mod service;

pub use model::InstanceInfo;
pub use service::{format_uptime, InstanceDescriptor};
