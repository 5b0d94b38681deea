pub mod issue;
pub mod measure;

pub use issue::*;
pub use measure::*;
