//! html-grader CLI — grade a local file or a live page against a checks list.

pub mod config;
pub mod runner;

pub use config::{ConfigError, GradeConfig};
pub use runner::{grade, render};
