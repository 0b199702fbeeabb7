//! Movies module - paginated listing and detail lookup

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
