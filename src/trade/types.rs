use serde::{Deserialize, Serialize};

// ── Side ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[serde(alias = "Buy")]
    Buy,
    #[serde(alias = "Sell")]
    Sell,
}

impl Side {
    /// +1 for a long leg, -1 for a short leg.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        }
    }
}

// ── Put / Call ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PutCall {
    #[serde(alias = "Put")]
    Put,
    #[serde(alias = "Call")]
    Call,
}

impl PutCall {
    /// The opposite flag. Curve valuation looks legs up under the inverted
    /// kind with strike and underlying swapped, which nets out to the
    /// leg's own payoff.
    #[inline]
    pub fn inverted(&self) -> PutCall {
        match self {
            PutCall::Put => PutCall::Call,
            PutCall::Call => PutCall::Put,
        }
    }
}

// ── Trade ──

/// One component of a trade. `put_call` is absent for stock legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    #[serde(default)]
    pub strike: f64,
    /// Premium per unit for options, entry price for stock.
    pub open_price: f64,
    /// Contract or share count. Direction lives in `side`.
    pub quantity: i64,
    pub side: Side,
    #[serde(default)]
    pub put_call: Option<PutCall>,
}

impl Leg {
    pub fn option(
        put_call: PutCall,
        side: Side,
        strike: f64,
        open_price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            strike,
            open_price,
            quantity,
            side,
            put_call: Some(put_call),
        }
    }

    pub fn stock(side: Side, open_price: f64, quantity: i64) -> Self {
        Self {
            strike: 0.0,
            open_price,
            quantity,
            side,
            put_call: None,
        }
    }

    #[inline]
    pub fn is_option(&self) -> bool {
        self.put_call.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub legs: Vec<Leg>,
}

impl Trade {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_legs() {
        let json = r#"{
            "legs": [
                {
                    "strike": 100.0, "openPrice": 5.0, "quantity": 1,
                    "side": "buy", "putCall": "call"
                },
                { "openPrice": 50.0, "quantity": 10, "side": "Sell" }
            ]
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.legs.len(), 2);
        assert_eq!(trade.legs[0].put_call, Some(PutCall::Call));
        assert!(trade.legs[0].is_option());
        assert_eq!(trade.legs[1].side, Side::Sell);
        assert_eq!(trade.legs[1].strike, 0.0);
        assert!(!trade.legs[1].is_option());
    }

    #[test]
    fn test_inversion_is_involutive() {
        assert_eq!(PutCall::Call.inverted(), PutCall::Put);
        assert_eq!(PutCall::Put.inverted().inverted(), PutCall::Put);
    }

    #[test]
    fn test_side_sign() {
        assert_eq!(Side::Buy.sign(), 1.0);
        assert_eq!(Side::Sell.sign(), -1.0);
    }
}
