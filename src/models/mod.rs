pub mod black_scholes;

use crate::trade::PutCall;

/// All option valuation models implement this trait.
/// value() must be a pure function: deterministic output from inputs only.
/// Send + Sync required for sharing across tokio tasks.
pub trait OptionValuator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Price a European option. Returns a non-negative value. Never panics.
    fn value(&self, inputs: &ValuationInputs, kind: PutCall) -> f64;
}

/// Market inputs for a single valuation. Stack-allocated, Copy.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct ValuationInputs {
    pub spot: f64,
    pub strike: f64,
    pub ttl_years: f64,
    pub sigma: f64,
    pub rate: f64,
}

impl ValuationInputs {
    /// Inputs at expiry with no volatility and no carry; models reduce to intrinsic value.
    #[inline]
    pub fn at_expiry(spot: f64, strike: f64) -> Self {
        Self {
            spot,
            strike,
            ttl_years: 0.0,
            sigma: 0.0,
            rate: 0.0,
        }
    }
}
