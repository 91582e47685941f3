//! Options chain sample data for the pricing view.

use crate::models::{OptionQuote, OptionSide};

pub const UNDERLYING_SYMBOL: &str = "ETH";

/// The quote rows for one side of the chain.
pub fn option_chain(side: OptionSide) -> Vec<OptionQuote> {
    match side {
        OptionSide::Calls => vec![
            quote(5000, 711.34, 712.69, 134.78, 14336, 0.8643),
            quote(5100, 617.04, 619.29, 74.84, 70318, 0.7435),
            quote(5200, 301.98, 307.00, 273.9, 70318, 0.5921),
            quote(5300, 189.77, 191.08, 81.50, 42365, 0.4562),
            quote(5400, 365.47, 372.23, 86.79, 87472, 0.3247),
            quote(5500, 240.59, 241.77, 122.54, 132400, 0.2158),
            quote(5600, 144.40, 146.54, 166.41, 146723, 0.1354),
            quote(5700, 79.50, 82.23, 231.79, 202444, 0.0781),
        ],
        OptionSide::Puts => vec![
            quote(5000, 18.54, 19.73, 18.58, 14336, -0.1357),
            quote(5100, 24.18, 25.47, 23.14, 70318, -0.2565),
            quote(5200, 37.87, 39.12, 38.19, 70318, -0.4079),
            quote(5300, 56.28, 58.15, 56.89, 42365, -0.5438),
            quote(5400, 81.79, 84.32, 82.37, 87472, -0.6753),
            quote(5500, 115.84, 118.97, 116.42, 132400, -0.7842),
            quote(5600, 159.64, 163.21, 160.23, 146723, -0.8646),
            quote(5700, 213.97, 218.45, 214.58, 202444, -0.9219),
        ],
    }
}

fn quote(strike: u32, bid: f64, ask: f64, last: f64, volume: u64, delta: f64) -> OptionQuote {
    OptionQuote {
        strike,
        bid,
        ask,
        last,
        volume,
        delta,
    }
}
