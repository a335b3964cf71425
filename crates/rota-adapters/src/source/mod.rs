mod file;
mod http;

pub use file::FileScheduleSource;
pub use http::HttpScheduleSource;
