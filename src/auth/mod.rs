//! Session-less authentication: signed tokens and the gate that checks them.

pub mod gate;
pub mod token;

pub use gate::{AUTH_HEADER, AuthUser, auth_middleware};
pub use token::{TOKEN_LIFETIME, TokenCodec, TokenError};
