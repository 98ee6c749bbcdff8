pub mod draw;
pub mod input;
pub mod menu;

pub use draw::*;
pub use input::*;
pub use menu::*;
