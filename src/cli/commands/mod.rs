mod command_result;
pub mod export;
pub mod extract;
pub mod helper;
pub mod init;
pub mod preview;
pub mod tree;

pub use command_result::*;
