//! askama views for the public pages.

pub mod views;
