pub mod error;
pub mod models;
pub mod quality;
pub mod sample;
pub mod source;
pub mod stats;
pub mod traits;

pub use error::{CoreError, Result};
pub use models::*;
pub use source::{Scope, Sourced};
pub use traits::{CodeHost, QualityHost};
