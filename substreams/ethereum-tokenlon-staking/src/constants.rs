use hex_literal::hex;

pub const LON_STAKING_ADDRESS: [u8; 20] = hex!("21C9847b047411FaB225dBd45199765ba5c0dA52");
pub const REWARD_DISTRIBUTOR_ADDRESS: [u8; 20] = hex!("1F8B0Ab82C79bDBB02AbB87F6681a464CF24D50A");
pub const LON_ADDRESS: [u8; 20] = hex!("0712629ced85a3a62e5bca96303b8fdd06cbf8dd");

/// `lastUpdatedAt` of a buyback total that has never been updated.
pub const START_TIMESTAMP: i32 = 1_617_206_400;

pub const STAKED_TOTAL_ID: &str = "1";
pub const BUYBACK_TOTAL_ID: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StakeType {
    Staked = 1,
    Cooldown = 2,
    Redeem = 3,
}

impl From<StakeType> for i32 {
    fn from(value: StakeType) -> Self {
        value as i32
    }
}
