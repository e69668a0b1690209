use crate::errors::{PayoffError, PayoffResult};
use crate::trade::{OptionLeg, StockLeg};

/// Sampling resolution of every curve (one cent).
pub const PRICE_STEP: f64 = 0.01;
/// Presentation shift added to every sample of an options curve.
pub const OPTION_PRICE_OFFSET: f64 = 1.0;
/// Stock curves span this fraction either side of the entry price.
pub const STOCK_RANGE_FRACTION: f64 = 0.25;

/// Tolerance so the upper bound is kept despite float error in (hi - lo) / step.
const BOUND_EPSILON: f64 = 1e-9;

/// An evenly spaced, inclusive range of underlying prices.
///
/// Samples are produced by index, never by repeated addition, so they are
/// strictly increasing and free of duplicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceGrid {
    pub lo: f64,
    pub hi: f64,
    pub step: f64,
    /// Added to each raw price to obtain the plotted x.
    pub offset: f64,
}

impl PriceGrid {
    /// Grid around the strikes of an options position.
    ///
    /// Multiple strikes pad the strike range by half its width on each side;
    /// a single strike is padded by twice the first leg's premium.
    pub fn for_options(legs: &[OptionLeg]) -> PayoffResult<Self> {
        let first = legs
            .first()
            .ok_or_else(|| PayoffError::InvalidTradeShape("options position has no legs".into()))?;

        let (min_strike, max_strike) = legs.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), leg| (lo.min(leg.strike), hi.max(leg.strike)),
        );

        let width = if legs.len() > 1 {
            (max_strike - min_strike) / 2.0
        } else {
            first.premium * 2.0
        };

        Self {
            lo: min_strike - width,
            hi: max_strike + width,
            step: PRICE_STEP,
            offset: OPTION_PRICE_OFFSET,
        }
        .checked_bounds()
    }

    /// Grid of +/-25% around the entry price of a stock position.
    pub fn for_stock(leg: &StockLeg) -> PayoffResult<Self> {
        Self {
            lo: leg.entry_price * (1.0 - STOCK_RANGE_FRACTION),
            hi: leg.entry_price * (1.0 + STOCK_RANGE_FRACTION),
            step: PRICE_STEP,
            offset: 0.0,
        }
        .checked_bounds()
    }

    /// Padding can push finite prices past f64::MAX.
    fn checked_bounds(self) -> PayoffResult<Self> {
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(PayoffError::InvalidTradeShape(format!(
                "price range [{}, {}] is not finite",
                self.lo, self.hi
            )));
        }
        Ok(self)
    }

    /// Whole steps from `lo` to `hi`, as f64 so huge ranges cannot overflow.
    /// None for an inverted range or an unusable step or bound.
    fn steps(&self) -> Option<f64> {
        let unusable = self.step.is_nan()
            || self.step <= 0.0
            || self.lo.is_nan()
            || self.hi.is_nan()
            || self.hi < self.lo;
        if unusable {
            return None;
        }
        Some(((self.hi - self.lo) / self.step + BOUND_EPSILON).floor())
    }

    /// Number of samples, saturating at usize::MAX. Zero for an inverted range.
    pub fn len(&self) -> usize {
        match self.steps() {
            None => 0,
            Some(steps) if !steps.is_finite() || steps >= usize::MAX as f64 => usize::MAX,
            Some(steps) => (steps as usize).saturating_add(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw underlying price of sample `i`.
    #[inline]
    pub fn raw_price(&self, i: usize) -> f64 {
        self.lo + i as f64 * self.step
    }

    /// Iterate `(raw underlying price, plotted x)` pairs in ascending order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.len()).map(move |i| {
            let raw = self.raw_price(i);
            (raw, raw + self.offset)
        })
    }

    /// Fail if the grid is unbounded or would exceed `limit` samples.
    pub fn ensure_within(&self, limit: usize) -> PayoffResult<usize> {
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(PayoffError::InvalidTradeShape(format!(
                "price range [{}, {}] is not finite",
                self.lo, self.hi
            )));
        }
        let Some(steps) = self.steps() else {
            return Ok(0);
        };
        if !steps.is_finite() || steps + 1.0 > limit as f64 {
            return Err(PayoffError::GridTooLarge {
                points: self.len(),
                limit,
            });
        }
        Ok(self.len())
    }
}
