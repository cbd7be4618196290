mod error;
mod records;

pub use error::ServiceError;
pub use records::RecordService;
