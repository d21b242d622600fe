//! Primitive value types shared by the order book: prices, sizes, identifiers,
//! sides and order kinds.

pub mod order;
pub mod trade;

use std::fmt;
use std::str::FromStr;

/// Price of an order or trade, in ticks. Signed so the market sentinel can live
/// below every real price; real prices are non-negative.
pub type Price = i64;

/// Quantity of an order or trade.
pub type Size = u64;

/// Caller-assigned order identifier. Uniqueness across currently-resting orders
/// is the caller's obligation.
pub type OrderId = u64;

/// Sentinel price carried by [`OrderType::Market`] orders: "no limit". It crosses
/// every level and never rests in the book.
pub const MARKET_PRICE: Price = -1;

/// Which side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order (bid).
    Buy,
    /// Sell order (ask).
    Sell,
}

impl Side {
    /// Returns the opposite side, i.e. the side an aggressor matches against.
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(ParseError::InvalidSide(s.to_string())),
        }
    }
}

/// The execution policy of an incoming order.
///
/// The kind decides three things at admission time: whether the order needs a
/// full-fill feasibility check before touching the book (FOK, AON), whether it
/// may match at all (AON declines when infeasible), and what happens to any
/// residual quantity (rest for GTC/GFD/AON, discard for the immediate kinds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    /// Execute immediately at any price; residual is discarded. Carries
    /// [`MARKET_PRICE`] instead of a limit.
    Market,
    /// Execute completely at the limit or better, or not at all.
    FillOrKill,
    /// Execute as much as possible at the limit or better; discard the rest.
    FillAndKill,
    /// Rest in the book until filled or cancelled.
    GoodTillCancel,
    /// Rest in the book until filled, cancelled, or swept at the day boundary.
    GoodForDay,
    /// Execute only in full, but may rest: an infeasible AllOrNone goes straight
    /// into the book and waits for an aggressor big enough to absorb it whole.
    AllOrNone,
}

impl OrderType {
    /// True for kinds that execute at admission and never rest in the book.
    pub fn is_immediate(self) -> bool {
        matches!(
            self,
            OrderType::Market | OrderType::FillOrKill | OrderType::FillAndKill
        )
    }

    /// True for kinds whose residual quantity is entered into the book.
    pub fn may_rest(self) -> bool {
        !self.is_immediate()
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            OrderType::Market => "MKT",
            OrderType::FillOrKill => "FOK",
            OrderType::FillAndKill => "FAK",
            OrderType::GoodTillCancel => "GTC",
            OrderType::GoodForDay => "GFD",
            OrderType::AllOrNone => "AON",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for OrderType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MKT" => Ok(OrderType::Market),
            "FOK" => Ok(OrderType::FillOrKill),
            "FAK" => Ok(OrderType::FillAndKill),
            "GTC" => Ok(OrderType::GoodTillCancel),
            "GFD" => Ok(OrderType::GoodForDay),
            "AON" => Ok(OrderType::AllOrNone),
            _ => Err(ParseError::InvalidOrderType(s.to_string())),
        }
    }
}

/// Errors produced when parsing the textual forms of [`Side`] and [`OrderType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not a recognized side.
    InvalidSide(String),
    /// The string is not a recognized order kind.
    InvalidOrderType(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSide(s) => write!(f, "invalid side: {}", s),
            ParseError::InvalidOrderType(s) => write!(f, "invalid order type: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}
