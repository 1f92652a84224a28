mod delete_dto;

pub use delete_dto::*;
