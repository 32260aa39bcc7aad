pub mod config;
pub mod constants;
pub mod driver;
pub mod pointer;
pub mod recycle;
pub mod render;
pub mod simulation;
pub mod star;
pub mod velocity;

pub use config::*;
pub use constants::*;
pub use driver::*;
pub use pointer::*;
pub use recycle::*;
pub use render::*;
pub use simulation::*;
pub use star::*;
pub use velocity::*;
