// @generated
pub mod tokenlon {
    pub mod common {
        // @@protoc_insertion_point(attribute:tokenlon.common.v1)
        pub mod v1 {
            include!("tokenlon.common.v1.rs");
            // @@protoc_insertion_point(tokenlon.common.v1)
        }
    }
}
