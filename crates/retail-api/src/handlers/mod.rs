//! HTTP handlers

pub mod branches;
pub mod franchises;
pub mod health;
pub mod products;
