pub mod player;
pub mod suggestion;

pub use player::*;
pub use suggestion::*;
