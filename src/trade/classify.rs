use crate::errors::{PayoffError, PayoffResult};
use crate::trade::types::{Leg, PutCall, Side, Trade};

/// An option leg with its put/call designation resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionLeg {
    pub put_call: PutCall,
    pub side: Side,
    pub strike: f64,
    pub premium: f64,
    pub quantity: i64,
}

/// A directional share position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockLeg {
    pub side: Side,
    pub entry_price: f64,
    pub quantity: i64,
}

/// A trade resolved into exactly one supported shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    Options(Vec<OptionLeg>),
    Stock(StockLeg),
}

impl Position {
    pub fn kind(&self) -> &'static str {
        match self {
            Position::Options(_) => "options",
            Position::Stock(_) => "stock",
        }
    }
}

/// True iff every leg carries a put/call designation.
#[inline]
pub fn is_option_position(legs: &[Leg]) -> bool {
    legs.iter().all(Leg::is_option)
}

/// Validate the trade and resolve it into a `Position`.
///
/// A trade with any leg lacking put/call is a stock position and only its
/// first leg is used; extra legs are ignored with a warning.
pub fn classify(trade: &Trade) -> PayoffResult<Position> {
    if trade.legs.is_empty() {
        return Err(PayoffError::InvalidTradeShape("trade has no legs".into()));
    }

    for (i, leg) in trade.legs.iter().enumerate() {
        validate_leg(i, leg)?;
    }

    if is_option_position(&trade.legs) {
        let legs = trade
            .legs
            .iter()
            .filter_map(|leg| {
                leg.put_call.map(|put_call| OptionLeg {
                    put_call,
                    side: leg.side,
                    strike: leg.strike,
                    premium: leg.open_price,
                    quantity: leg.quantity,
                })
            })
            .collect();
        return Ok(Position::Options(legs));
    }

    if trade.legs.len() > 1 {
        tracing::warn!(
            legs = trade.legs.len(),
            "non-option trade has multiple legs, using the first"
        );
    }

    let leg = &trade.legs[0];
    Ok(Position::Stock(StockLeg {
        side: leg.side,
        entry_price: leg.open_price,
        quantity: leg.quantity,
    }))
}

fn validate_leg(index: usize, leg: &Leg) -> PayoffResult<()> {
    check_price(index, "strike", leg.strike)?;
    check_price(index, "openPrice", leg.open_price)?;
    if leg.quantity < 0 {
        return Err(PayoffError::InvalidTradeShape(format!(
            "leg {index}: quantity must be non-negative, got {}",
            leg.quantity
        )));
    }
    Ok(())
}

fn check_price(index: usize, field: &str, value: f64) -> PayoffResult<()> {
    if !value.is_finite() {
        return Err(PayoffError::InvalidTradeShape(format!(
            "leg {index}: {field} must be finite, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(PayoffError::InvalidTradeShape(format!(
            "leg {index}: {field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}
