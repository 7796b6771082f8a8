pub mod config;
pub mod logging;

pub mod catalog;
pub mod export;
pub mod output;
pub mod resolution;
pub mod retry;
pub mod source;
pub mod zenodo;
