pub mod aggregate;
pub mod kustomize_image;
pub mod plugin_parameter;

pub use aggregate::*;
pub use kustomize_image::KustomizeImage;
pub use plugin_parameter::{ParameterShape, ParameterValue, PluginParameter};
