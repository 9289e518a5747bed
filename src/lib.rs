//! Read-only query service exposing stock sector and company finance data
//! from a SQLite database over HTTP.

pub mod api;
pub mod config;
pub mod database;
pub mod models;
