//! Short-lived JWT generation for overlay/admin authentication.
//!
//! Mints HS256 compact tokens that let a broadcaster identity authenticate
//! against the overlay or admin endpoints during local development.
//!
//! See [`TokenBuilder`] for the signing algorithm and [`Key`] for key material.

mod audience;
mod claims;
mod key;
mod token;

pub use audience::*;
pub use claims::*;
pub use key::*;
pub use token::*;
