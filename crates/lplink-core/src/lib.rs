pub mod config;
pub mod logging;

pub mod batch;
pub mod mapping;
pub mod project;
pub mod replace;
pub mod report;
