pub mod error;
pub mod helpers;
pub mod loader;
pub mod logging;
pub mod session;
pub mod settings;
pub mod ui;

pub use error::Error;
pub use session::Session;
