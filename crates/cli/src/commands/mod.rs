pub mod genes;
pub mod init;
pub mod run;
