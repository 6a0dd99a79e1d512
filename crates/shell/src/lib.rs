//! Interactive console front end: menu loop, prompts and the session state it
//! drives.

pub mod app;
pub mod config;
pub mod console;
pub mod menu;
pub mod session;

pub use app::run;
pub use config::ShellConfig;
pub use console::Console;
pub use menu::MenuChoice;
pub use session::Session;
