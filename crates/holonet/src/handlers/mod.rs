mod body;
pub mod characters;
pub mod error;
pub mod favorites;
pub mod health;
pub mod planets;
pub mod root;
pub mod users;

pub use error::AppError;
