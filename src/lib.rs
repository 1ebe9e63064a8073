pub mod args;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod service;
pub mod terminal;
pub mod validate;
