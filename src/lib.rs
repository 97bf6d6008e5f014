pub mod config;
pub mod entities;
pub mod input;
pub mod level;
pub mod math;
pub mod render;
pub mod session;
pub mod tanks;
