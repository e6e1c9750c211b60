pub mod components;
pub mod config;
pub mod spin;
pub mod system;
