pub mod errors;
pub mod models;
pub mod stream;
pub mod traits;
