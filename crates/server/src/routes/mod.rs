//! HTTP routes.

mod pages;

pub use pages::*;
