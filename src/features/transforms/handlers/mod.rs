mod transform_handler;

pub use transform_handler::*;
