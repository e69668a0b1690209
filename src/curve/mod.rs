pub mod format;
pub mod grid;
pub mod pnl;

use crate::errors::PayoffResult;
use crate::models::black_scholes::BlackScholesEuropean;
use crate::models::OptionValuator;
use crate::trade::{classify, Position, Trade};
use format::{price_header, usd_formatter, CurrencyFormatter};
use grid::PriceGrid;
use std::sync::Arc;

/// One sample of a payoff diagram, ready for a chart tooltip.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PricePoint {
    /// Plotted underlying price (includes the options presentation offset).
    pub x: f64,
    /// Total P/L at this price.
    pub y: f64,
    pub header: String,
    pub label: String,
}

/// A computed curve together with the shape it was computed for.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PayoffCurve {
    pub position: &'static str,
    pub points: Vec<PricePoint>,
}

/// Builds payoff curves. Holds no per-trade state, so one instance can be
/// shared across requests.
#[derive(Clone)]
pub struct PayoffCurveGenerator {
    valuator: Arc<dyn OptionValuator>,
    formatter: CurrencyFormatter,
    max_points: usize,
}

impl PayoffCurveGenerator {
    pub fn new(
        valuator: Arc<dyn OptionValuator>,
        formatter: CurrencyFormatter,
        max_points: usize,
    ) -> Self {
        Self {
            valuator,
            formatter,
            max_points,
        }
    }

    /// Black-Scholes valuation with USD labels.
    pub fn with_defaults(max_points: usize) -> Self {
        Self::new(Arc::new(BlackScholesEuropean::new()), usd_formatter(), max_points)
    }

    /// Sample the P/L of `trade` across its price grid, ascending by `x`.
    pub fn generate(&self, trade: &Trade) -> PayoffResult<Vec<PricePoint>> {
        Ok(self.generate_curve(trade)?.points)
    }

    pub fn generate_curve(&self, trade: &Trade) -> PayoffResult<PayoffCurve> {
        let position = classify(trade)?;

        let grid = match &position {
            Position::Options(legs) => PriceGrid::for_options(legs)?,
            Position::Stock(leg) => PriceGrid::for_stock(leg)?,
        };
        let len = grid.ensure_within(self.max_points)?;

        let mut points = Vec::with_capacity(len);
        for (underlying, x) in grid.samples() {
            let y = pnl::position_pnl(self.valuator.as_ref(), &position, underlying);
            points.push(PricePoint {
                x,
                y,
                header: price_header(x),
                label: (self.formatter)(y),
            });
        }

        tracing::debug!(
            position = position.kind(),
            model = self.valuator.name(),
            legs = trade.legs.len(),
            points = points.len(),
            lo = grid.lo,
            hi = grid.hi,
            "payoff curve generated"
        );

        Ok(PayoffCurve {
            position: position.kind(),
            points,
        })
    }
}
