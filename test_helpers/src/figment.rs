//! Shared helpers for working with `figment::Jail` in tests.
//!
//! Wraps the jail so setup closures can return a value and callers get an
//! `anyhow::Result` back.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail restores the working directory and environment once the closure
/// completes, even when it fails.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!("figment jail failed: {err}"))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any displayable error into a [`figment::Error`] so it can be
/// returned from a jail closure.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adapter over owned errors"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
