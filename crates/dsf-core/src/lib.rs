pub mod config;
pub mod logging;

pub mod catalog;
pub mod info;
pub mod kaggle;
pub mod organize;
pub mod runner;
pub mod source;
