pub mod api;
pub mod error;
pub mod host;

pub use api::*;
pub use error::*;
pub use host::*;
