/// Id of the singleton counters.
pub const TOTAL_ID: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Normal,
    Cancelled,
    FullyFilled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Normal => "Normal",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::FullyFilled => "FullyFilled",
        }
    }
}

/// Who filled a limit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitOrderFilledType {
    ByProtocol,
    ByTrader,
}

impl LimitOrderFilledType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitOrderFilledType::ByProtocol => "ByProtocol",
            LimitOrderFilledType::ByTrader => "ByTrader",
        }
    }
}
