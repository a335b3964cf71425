pub mod alert_service;
pub mod error;

pub use alert_service::AlertService;
pub use error::AppError;
