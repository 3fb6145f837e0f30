pub mod controller;
pub mod store;

pub use controller::*;
pub use store::*;
