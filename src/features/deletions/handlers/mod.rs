mod delete_handler;

pub use delete_handler::*;
