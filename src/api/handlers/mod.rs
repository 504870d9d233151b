pub mod players;
pub mod system;

pub use players::*;
pub use system::*;
