//! Profit and loss at a hypothetical underlying price.
//!
//! option leg:  (V - premium) * quantity * 100 * side
//! stock leg:   (S - entry)   * quantity * side
//!
//! where V is the leg's value at expiry. The side sign is applied last so a
//! sell leg is the exact negation of the matching buy leg.

use crate::models::{OptionValuator, ValuationInputs};
use crate::trade::{OptionLeg, Position, StockLeg};

/// Shares per listed option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// P/L of one option leg with the underlying at `underlying`.
///
/// The leg strike goes in the model's spot slot and the underlying in its
/// strike slot, under the inverted put/call flag. For a call leg this is a
/// put paying max(underlying - strike, 0), i.e. the call's own payoff.
#[inline]
pub fn option_leg_pnl(valuator: &dyn OptionValuator, leg: &OptionLeg, underlying: f64) -> f64 {
    let inputs = ValuationInputs::at_expiry(leg.strike, underlying);
    let value = valuator.value(&inputs, leg.put_call.inverted());
    (value - leg.premium) * leg.quantity as f64 * CONTRACT_MULTIPLIER * leg.side.sign()
}

#[inline]
pub fn stock_leg_pnl(leg: &StockLeg, underlying: f64) -> f64 {
    (underlying - leg.entry_price) * leg.quantity as f64 * leg.side.sign()
}

/// Total P/L of a position, summed leg by leg.
pub fn position_pnl(valuator: &dyn OptionValuator, position: &Position, underlying: f64) -> f64 {
    match position {
        Position::Options(legs) => legs
            .iter()
            .map(|leg| option_leg_pnl(valuator, leg, underlying))
            .sum(),
        Position::Stock(leg) => stock_leg_pnl(leg, underlying),
    }
}
