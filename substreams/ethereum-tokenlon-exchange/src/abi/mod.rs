#![allow(clippy::all)]
pub mod amm_wrapper;
pub mod amm_wrapper_with_path;
pub mod limit_order;
pub mod limit_order_back_to_maker;
pub mod pmm;
