pub mod health;
pub mod movies;
pub mod request_id;
