pub mod format;
pub mod state;
