mod presets;
mod transform_service;

pub use presets::PRESETS;
pub use transform_service::TransformService;
