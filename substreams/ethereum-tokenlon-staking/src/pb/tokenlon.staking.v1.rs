// @generated
/// LonStaking and RewardDistributor logs of a block, in ordinal order.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakingEvents {
    #[prost(message, repeated, tag="1")]
    pub events: ::prost::alloc::vec::Vec<StakingEvent>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakingEvent {
    #[prost(message, optional, tag="1")]
    pub meta: ::core::option::Option<::tokenlon_substreams::pb::tokenlon::common::v1::EventMeta>,
    #[prost(oneof="staking_event::Event", tags="10, 11, 12, 13, 14, 15, 16, 17")]
    pub event: ::core::option::Option<staking_event::Event>,
}
/// Nested message and enum types in `StakingEvent`.
pub mod staking_event {
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Staked {
        #[prost(bytes="vec", tag="1")]
        pub user: ::prost::alloc::vec::Vec<u8>,
        #[prost(string, tag="2")]
        pub amount: ::prost::alloc::string::String,
        #[prost(string, tag="3")]
        pub share: ::prost::alloc::string::String,
        /// LON held by the staking contract per share, read at this block.
        #[prost(string, tag="4")]
        pub scale_index: ::prost::alloc::string::String,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Redeem {
        #[prost(bytes="vec", tag="1")]
        pub user: ::prost::alloc::vec::Vec<u8>,
        #[prost(string, tag="2")]
        pub share: ::prost::alloc::string::String,
        #[prost(string, tag="3")]
        pub redeem_amount: ::prost::alloc::string::String,
        #[prost(string, tag="4")]
        pub penalty_amount: ::prost::alloc::string::String,
        #[prost(string, tag="5")]
        pub scale_index: ::prost::alloc::string::String,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Cooldown {
        #[prost(bytes="vec", tag="1")]
        pub user: ::prost::alloc::vec::Vec<u8>,
        #[prost(string, tag="2")]
        pub cooldown_seconds: ::prost::alloc::string::String,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
    pub struct BuyBack {
        #[prost(bytes="vec", tag="1")]
        pub fee_token: ::prost::alloc::vec::Vec<u8>,
        #[prost(string, tag="2")]
        pub fee_token_amount: ::prost::alloc::string::String,
        #[prost(string, tag="3")]
        pub swapped_lon_amount: ::prost::alloc::string::String,
        #[prost(string, tag="4")]
        pub l_factor: ::prost::alloc::string::String,
        #[prost(string, tag="5")]
        pub r_factor: ::prost::alloc::string::String,
        #[prost(string, tag="6")]
        pub min_buy: ::prost::alloc::string::String,
        #[prost(string, tag="7")]
        pub max_buy: ::prost::alloc::string::String,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DistributeLon {
        #[prost(string, tag="1")]
        pub treasury_amount: ::prost::alloc::string::String,
        #[prost(string, tag="2")]
        pub lon_staking_amount: ::prost::alloc::string::String,
        #[prost(string, tag="3")]
        pub scale_index: ::prost::alloc::string::String,
        /// No BuyBack preceded this distribution in its transaction: the fees were paid in LON.
        #[prost(bool, tag="4")]
        pub self_buyback: bool,
        /// Buyback configuration of LON, read for self buybacks. Unset when the call reverted.
        #[prost(message, optional, tag="5")]
        pub lon_fee_token: ::core::option::Option<super::FeeTokenConfig>,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MintLon {
        #[prost(string, tag="1")]
        pub minted_amount: ::prost::alloc::string::String,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
    pub struct EnableFeeToken {
        #[prost(bytes="vec", tag="1")]
        pub fee_token: ::prost::alloc::vec::Vec<u8>,
        #[prost(bool, tag="2")]
        pub enable: bool,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SetFeeToken {
        #[prost(bytes="vec", tag="1")]
        pub fee_token: ::prost::alloc::vec::Vec<u8>,
        #[prost(string, tag="2")]
        pub exchange_index: ::prost::alloc::string::String,
        #[prost(bytes="vec", repeated, tag="3")]
        pub path: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
        #[prost(string, tag="4")]
        pub l_factor: ::prost::alloc::string::String,
        #[prost(string, tag="5")]
        pub r_factor: ::prost::alloc::string::String,
        #[prost(string, tag="6")]
        pub min_buy: ::prost::alloc::string::String,
        #[prost(string, tag="7")]
        pub max_buy: ::prost::alloc::string::String,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Event {
        #[prost(message, tag="10")]
        Staked(Staked),
        #[prost(message, tag="11")]
        Redeem(Redeem),
        #[prost(message, tag="12")]
        Cooldown(Cooldown),
        #[prost(message, tag="13")]
        BuyBack(BuyBack),
        #[prost(message, tag="14")]
        DistributeLon(DistributeLon),
        #[prost(message, tag="15")]
        MintLon(MintLon),
        #[prost(message, tag="16")]
        EnableFeeToken(EnableFeeToken),
        #[prost(message, tag="17")]
        SetFeeToken(SetFeeToken),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FeeTokenConfig {
    #[prost(string, tag="1")]
    pub l_factor: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub r_factor: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub min_buy: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub max_buy: ::prost::alloc::string::String,
}
// @@protoc_insertion_point(module)
