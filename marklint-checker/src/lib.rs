pub mod checker;
pub mod error;
pub mod result;

pub use checker::{LinkChecker, ProgressCallback};
pub use error::CheckError;
pub use result::ProbeOutcome;
