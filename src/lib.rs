//! Perch Library
//!
//! Core library for the Perch desktop messenger shell.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod hero;
pub mod i18n;
pub mod storage;
pub mod types;
pub mod ui;
