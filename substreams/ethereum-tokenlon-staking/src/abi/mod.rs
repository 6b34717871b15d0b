#![allow(clippy::all)]
pub mod lon_staking;
pub mod reward_distributor;
