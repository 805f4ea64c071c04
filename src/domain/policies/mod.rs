//! Domain Policies
//!
//! Rules that govern how network fields are compared.

mod type_profile;

pub use type_profile::{ProfileRegistry, TypeProfile};
