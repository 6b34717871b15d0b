// @generated
/// Where a decoded log came from: its block, transaction and position.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EventMeta {
    #[prost(uint64, tag="1")]
    pub block_number: u64,
    #[prost(bytes="vec", tag="2")]
    pub block_hash: ::prost::alloc::vec::Vec<u8>,
    /// Block timestamp in seconds.
    #[prost(uint64, tag="3")]
    pub timestamp: u64,
    #[prost(bytes="vec", tag="4")]
    pub tx_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="5")]
    pub tx_from: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="6")]
    pub tx_to: ::prost::alloc::vec::Vec<u8>,
    /// Decimal string, "0" when the trace carries no gas price.
    #[prost(string, tag="7")]
    pub gas_price: ::prost::alloc::string::String,
    /// Index of the log within the block.
    #[prost(uint32, tag="8")]
    pub log_index: u32,
    #[prost(uint64, tag="9")]
    pub ordinal: u64,
    /// The contract that emitted the log.
    #[prost(bytes="vec", tag="10")]
    pub address: ::prost::alloc::vec::Vec<u8>,
}
// @@protoc_insertion_point(module)
