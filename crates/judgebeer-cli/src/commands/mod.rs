pub mod init;
pub mod output;
pub mod report;
pub mod score;
pub mod styles;
pub mod taste;
pub mod validate;
