pub mod robo;
pub use robo::*;
