pub mod classify;
mod command_result;
pub mod extract;
pub mod init;
pub mod sync;

pub use command_result::*;
