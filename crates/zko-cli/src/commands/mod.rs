pub mod config;
pub mod init;
pub mod place;
pub mod prove;
pub mod show;
pub mod status;
pub mod verify;

use anyhow::{Context, Result};
use zko_types::Scalar;

/// Parse public inputs given as decimal or 0x-prefixed hex
pub fn parse_scalars(values: &[String]) -> Result<Vec<Scalar>> {
    values
        .iter()
        .map(|v| {
            v.parse::<Scalar>()
                .with_context(|| format!("invalid public input {v:?}"))
        })
        .collect()
}
