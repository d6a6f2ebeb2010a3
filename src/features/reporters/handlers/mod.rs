pub mod reporter_handler;

pub use reporter_handler::{list_reporters, register_reporter};
