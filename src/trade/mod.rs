pub mod classify;
pub mod types;

pub use classify::{classify, is_option_position, OptionLeg, Position, StockLeg};
pub use types::{Leg, PutCall, Side, Trade};
