pub mod app;
pub mod core;
pub mod features;
pub mod pages;
