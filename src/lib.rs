#![forbid(unsafe_code)]

pub mod build;
pub mod cli;
pub mod config;
pub mod index;
pub mod logging;
pub mod markdown;
pub mod math;
pub mod split;
pub mod template;
pub mod toc;
