//! Store keys and entity names shared by the store modules and `graph_out`.

pub const SWAPPED_TOTAL: &str = "SwappedTotal";
pub const FILL_ORDER_TOTAL: &str = "FillOrderTotal";
pub const FILL_RFQ_V1_ORDER_TOTAL: &str = "FillRFQV1OrderTotal";
pub const USER: &str = "User";
pub const TRADED_TOKEN: &str = "TradedToken";
pub const ORDER: &str = "Order";

pub const TOTAL: &str = "total";
pub const TRADE_COUNT: &str = "tradeCount";

/// Running count of a `*Total` singleton.
pub fn total(entity: &str) -> String {
    format!("{entity}:{TOTAL}")
}

pub fn trade_count(user: &str) -> String {
    format!("{USER}:{user}:{TRADE_COUNT}")
}
