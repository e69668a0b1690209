use crate::models::{OptionValuator, ValuationInputs};
use crate::trade::PutCall;
use statrs::distribution::{ContinuousCDF, Normal};

/// Black-Scholes European option pricing.
///
/// C = S * Phi(d1) - K * e^(-rT) * Phi(d2)
/// P = K * e^(-rT) * Phi(-d2) - S * Phi(-d1)
///
/// where d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma * sqrt(T)) and d2 = d1 - sigma * sqrt(T).
///
/// At zero time or zero volatility the formula degenerates to intrinsic value,
/// which is computed directly so the at-the-money point is exactly zero.
pub struct BlackScholesEuropean {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
}

impl BlackScholesEuropean {
    pub fn new() -> Self {
        Self {
            normal: Normal::standard(),
        }
    }
}

impl Default for BlackScholesEuropean {
    fn default() -> Self {
        Self::new()
    }
}

/// Payoff if exercised now against a discounted strike. Exactly 0.0 when spot == strike.
#[inline]
pub fn intrinsic_value(spot: f64, discounted_strike: f64, kind: PutCall) -> f64 {
    match kind {
        PutCall::Call => (spot - discounted_strike).max(0.0),
        PutCall::Put => (discounted_strike - spot).max(0.0),
    }
}

impl OptionValuator for BlackScholesEuropean {
    #[inline]
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    #[inline]
    fn value(&self, inputs: &ValuationInputs, kind: PutCall) -> f64 {
        let ttl = inputs.ttl_years.max(0.0);
        let discount = (-inputs.rate * ttl).exp();
        let discounted_strike = inputs.strike * discount;
        let sigma_sqrt_t = inputs.sigma * ttl.sqrt();

        // Guard: no time value left, or log-moneyness undefined
        if sigma_sqrt_t < 1e-12 || inputs.spot <= 0.0 || inputs.strike <= 0.0 {
            return intrinsic_value(inputs.spot, discounted_strike, kind);
        }

        let d1 = ((inputs.spot / inputs.strike).ln()
            + (inputs.rate + 0.5 * inputs.sigma * inputs.sigma) * ttl)
            / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;

        let price = match kind {
            PutCall::Call => {
                inputs.spot * self.normal.cdf(d1) - discounted_strike * self.normal.cdf(d2)
            }
            PutCall::Put => {
                discounted_strike * self.normal.cdf(-d2) - inputs.spot * self.normal.cdf(-d1)
            }
        };

        // Rounding in the CDF can push deep OTM prices slightly negative
        price.max(0.0)
    }
}
