// @generated
/// Swap, fill and limit order logs of a block, in ordinal order.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExchangeEvents {
    #[prost(message, repeated, tag="1")]
    pub events: ::prost::alloc::vec::Vec<ExchangeEvent>,
    /// ERC20 metadata of the tokens traded in the block, read at the block. Tokens whose
    /// calls revert are absent.
    #[prost(message, repeated, tag="2")]
    pub tokens: ::prost::alloc::vec::Vec<Token>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Token {
    #[prost(bytes="vec", tag="1")]
    pub address: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, tag="2")]
    pub decimals: i32,
    #[prost(string, tag="3")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub symbol: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExchangeEvent {
    #[prost(message, optional, tag="1")]
    pub meta: ::core::option::Option<::tokenlon_substreams::pb::tokenlon::common::v1::EventMeta>,
    #[prost(oneof="exchange_event::Event", tags="10, 11, 12, 13, 14, 15")]
    pub event: ::core::option::Option<exchange_event::Event>,
}
/// Nested message and enum types in `ExchangeEvent`.
pub mod exchange_event {
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Event {
        #[prost(message, tag="10")]
        Swapped(super::Swapped),
        #[prost(message, tag="11")]
        PmmFillOrder(super::FillOrder),
        #[prost(message, tag="12")]
        RfqFillOrder(super::FillOrder),
        #[prost(message, tag="13")]
        LimitOrderFilledByProtocol(super::LimitOrderFilledByProtocol),
        #[prost(message, tag="14")]
        LimitOrderFilledByTrader(super::LimitOrderFilledByTrader),
        #[prost(message, tag="15")]
        OrderCancelled(super::OrderCancelled),
    }
}
/// AMMWrapper swap. The flat event has no salt and deadline, they are left at "0".
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Swapped {
    #[prost(string, tag="1")]
    pub source: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="2")]
    pub execute_tx_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="3")]
    pub user_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="4")]
    pub taker_asset_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="5")]
    pub taker_asset_amount: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="6")]
    pub maker_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="7")]
    pub maker_asset_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="8")]
    pub maker_asset_amount: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="9")]
    pub receiver_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="10")]
    pub settle_amount: ::prost::alloc::string::String,
    #[prost(string, tag="11")]
    pub received_amount: ::prost::alloc::string::String,
    #[prost(uint32, tag="12")]
    pub fee_factor: u32,
    #[prost(uint32, tag="13")]
    pub subsidy_factor: u32,
    #[prost(string, tag="14")]
    pub salt: ::prost::alloc::string::String,
    #[prost(string, tag="15")]
    pub deadline: ::prost::alloc::string::String,
    /// Calldata of the transaction without its selector.
    #[prost(bytes="vec", tag="16")]
    pub inputs: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FillOrder {
    #[prost(string, tag="1")]
    pub source: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="2")]
    pub execute_tx_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="3")]
    pub order_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="4")]
    pub user_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="5")]
    pub taker_asset_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="6")]
    pub taker_asset_amount: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="7")]
    pub maker_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="8")]
    pub maker_asset_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="9")]
    pub maker_asset_amount: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="10")]
    pub receiver_addr: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="11")]
    pub settle_amount: ::prost::alloc::string::String,
    #[prost(uint32, tag="12")]
    pub fee_factor: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FillReceipt {
    #[prost(bytes="vec", tag="1")]
    pub maker_token: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="2")]
    pub taker_token: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="3")]
    pub maker_token_filled_amount: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub taker_token_filled_amount: ::prost::alloc::string::String,
    #[prost(string, tag="5")]
    pub remaining_amount: ::prost::alloc::string::String,
    #[prost(string, tag="6")]
    pub maker_token_fee: ::prost::alloc::string::String,
    #[prost(string, tag="7")]
    pub taker_token_fee: ::prost::alloc::string::String,
}
/// Both deployments of the event. Mainnet reports the relayer profit, which lands in
/// taker_token_profit and taker_token_profit_fee, and has no back-to-maker share.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LimitOrderFilledByProtocol {
    #[prost(bytes="vec", tag="1")]
    pub order_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="2")]
    pub maker: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="3")]
    pub taker: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="4")]
    pub allow_fill_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="5")]
    pub relayer: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="6")]
    pub profit_recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag="7")]
    pub fill_receipt: ::core::option::Option<FillReceipt>,
    #[prost(string, tag="8")]
    pub taker_token_profit: ::prost::alloc::string::String,
    #[prost(string, tag="9")]
    pub taker_token_profit_fee: ::prost::alloc::string::String,
    #[prost(string, tag="10")]
    pub taker_token_profit_back_to_maker: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LimitOrderFilledByTrader {
    #[prost(bytes="vec", tag="1")]
    pub order_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="2")]
    pub maker: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="3")]
    pub taker: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="4")]
    pub allow_fill_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="5")]
    pub recipient: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag="6")]
    pub fill_receipt: ::core::option::Option<FillReceipt>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderCancelled {
    #[prost(bytes="vec", tag="1")]
    pub order_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="2")]
    pub maker: ::prost::alloc::vec::Vec<u8>,
}
// @@protoc_insertion_point(module)
