//! Ownership checks shared by every mutating endpoint.
//!
//! A resource is owned by exactly one user id. Mutations are allowed only
//! when the authenticated identity equals that owner; the decision never
//! looks at anything else in the resource.

use crate::{Error, Result};

/// A persisted entity recording the identity allowed to mutate it.
pub trait Ownable {
    fn owner(&self) -> &str;
}

impl<T: Ownable + ?Sized> Ownable for &T {
    fn owner(&self) -> &str {
        (**self).owner()
    }
}

/// Returns `Err(Error::NotOwner)` unless `identity` owns `resource`.
///
/// Callers resolve the resource first; a missing resource is a not-found
/// condition and must never reach this check.
pub fn authorize<R: Ownable + ?Sized>(identity: &str, resource: &R) -> Result<()> {
    if resource.owner() == identity {
        return Ok(());
    }

    Err(Error::NotOwner)
}
