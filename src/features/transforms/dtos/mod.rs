mod transform_dto;

pub use transform_dto::*;
