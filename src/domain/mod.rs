//! Domain layer: the fixed route table describing the site.

pub mod routes;
