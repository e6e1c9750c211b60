pub mod game;
pub mod spin;
