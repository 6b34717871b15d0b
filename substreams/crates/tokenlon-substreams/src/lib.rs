pub mod abi;
pub mod entity;
pub mod models;
pub mod params;
pub mod pb;
pub mod scalar;
pub mod store;
pub mod token;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub mod prelude {
    pub use super::{
        entity::*, models::*, pb::tokenlon::common::v1::EventMeta, scalar::*, store::*,
    };
}
