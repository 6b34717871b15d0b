//! Store keys and entity names shared by the store modules and `graph_out`.

pub const STAKED_TOTAL: &str = "StakedTotal";
pub const STAKED_DAY_DATA: &str = "StakedDayData";
pub const BUYBACK_TOTAL: &str = "BuyBackTotal";
pub const BUYBACK_DAY_DATA: &str = "BuyBackDayData";
pub const FEE_TOKEN: &str = "FeeToken";

pub const TOTAL_STAKED_AMOUNT: &str = "totalStakedAmount";
pub const DAILY_STAKED_AMOUNT: &str = "dailyStakedAmount";
pub const PENALTY: &str = "penalty";
pub const TX_COUNT: &str = "txCount";

pub const TOTAL_TREASURY_AMOUNT: &str = "totalTreasuryAmount";
pub const TOTAL_LON_STAKING_AMOUNT: &str = "totalLonStakingAmount";
pub const TOTAL_MINTED_AMOUNT: &str = "totalMintedAmount";
pub const DAILY_TREASURY_AMOUNT: &str = "dailyTreasuryAmount";
pub const DAILY_LON_STAKING_AMOUNT: &str = "dailyLonStakingAmount";
pub const DAILY_MINTED_AMOUNT: &str = "dailyMintedAmount";

pub fn staked_total(field: &str) -> String {
    format!("{STAKED_TOTAL}:{field}")
}

pub fn staked_day(day: u64, field: &str) -> String {
    format!("{STAKED_DAY_DATA}:{day}:{field}")
}

pub fn buyback_total(field: &str) -> String {
    format!("{BUYBACK_TOTAL}:{field}")
}

pub fn buyback_day(day: u64, field: &str) -> String {
    format!("{BUYBACK_DAY_DATA}:{day}:{field}")
}
