//! Domain definitions.

pub mod apartment;
pub mod quote;
pub mod stay;

pub use self::{apartment::Apartment, quote::Quote, stay::Stay};
