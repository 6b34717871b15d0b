use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

/// Parses a module's `params` string, written as a URL query (`key=value&key=value`).
pub fn parse_params<T: DeserializeOwned>(query: &str) -> Result<T> {
    serde_qs::from_str(query).map_err(|e| anyhow!("Failed to parse query params: {}", e))
}

/// Decodes a 20 byte address, with or without its `0x` prefix.
pub fn decode_address(value: &str) -> Result<Vec<u8>> {
    let value = value.trim();
    let address = hex::decode(value.strip_prefix("0x").unwrap_or(value))
        .map_err(|e| anyhow!("Invalid address hex {}: {}", value, e))?;

    if address.len() != 20 {
        return Err(anyhow!("address {} must be 20 bytes, got {}", value, address.len()));
    }
    Ok(address)
}
