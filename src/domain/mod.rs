pub mod employee;
pub mod seed;

pub use employee::*;
pub use seed::*;
