pub mod config;
pub mod ipa;
pub mod output;
pub mod payload;
pub mod scanner;
