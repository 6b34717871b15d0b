// @generated
pub mod tokenlon {
    pub mod staking {
        // @@protoc_insertion_point(attribute:tokenlon.staking.v1)
        pub mod v1 {
            include!("tokenlon.staking.v1.rs");
            // @@protoc_insertion_point(tokenlon.staking.v1)
        }
    }
}
