//! Domain types shared by the jokes store and HTTP layers.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod joke;
pub mod types;
pub mod validation;
