pub mod actions;
pub mod deployment;
pub mod org;
pub mod repo;
pub mod user;

pub use actions::*;
pub use deployment::*;
pub use org::*;
pub use repo::*;
pub use user::*;
