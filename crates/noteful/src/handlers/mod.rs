mod extract;

pub mod error;
pub mod folders;
pub mod health;
pub mod notes;

pub use error::AppError;
