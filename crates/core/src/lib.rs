#![forbid(unsafe_code)]

pub mod bmi;
pub mod error;
pub mod model;
pub mod phone;

pub use error::{CatalogError, QuizError};
