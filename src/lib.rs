// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod record;
pub mod csv;
pub mod store;
pub mod facets;
pub mod query;
pub mod view;

pub mod progress;
pub mod feed;
pub mod file;
pub mod cli;
pub mod gui;
