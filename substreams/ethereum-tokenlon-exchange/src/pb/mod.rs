// @generated
pub mod tokenlon {
    pub mod exchange {
        // @@protoc_insertion_point(attribute:tokenlon.exchange.v1)
        pub mod v1 {
            include!("tokenlon.exchange.v1.rs");
            // @@protoc_insertion_point(tokenlon.exchange.v1)
        }
    }
}
