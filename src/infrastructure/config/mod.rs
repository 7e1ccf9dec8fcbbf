//! Infrastructure configuration modules.

pub mod explorer;
pub mod logging;
pub mod monitor;
pub mod settings;
pub mod telegram;
