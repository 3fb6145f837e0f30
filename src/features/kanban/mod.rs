pub mod components;
pub mod hooks;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use components::*;
pub use hooks::*;
pub use services::*;
