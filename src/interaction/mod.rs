pub mod session;
pub mod spin_button;
