//! Folio: a personal website served from compiled askama templates.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
