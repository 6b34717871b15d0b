#![allow(clippy::all)]
pub mod erc20;
pub mod erc20_bytes32;
