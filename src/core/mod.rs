pub mod apps;
pub mod cloud;
pub mod clusters;
pub mod project;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{App, Cluster, Project};
pub use crate::domain::ports::{ConfigProvider, ControlPlane};
pub use crate::utils::error::Result;
