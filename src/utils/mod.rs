pub mod error;

pub use error::{BoxResult, RustocError};
