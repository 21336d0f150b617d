pub mod error;
pub mod mode;
pub mod settings;

pub use error::AppError;
pub use mode::Mode;
pub use settings::{MODE_KEY, Settings};
