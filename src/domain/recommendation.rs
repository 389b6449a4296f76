//! Recommendation policy: positive-signal count → graded advice.

use crate::domain::signal::SignalSet;
use std::fmt;

/// Graded advice, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Advice {
    DoNotEnter,
    HoldWait,
    CautiousBuy,
    StrongBuy,
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Advice::DoNotEnter => "Do Not Enter",
            Advice::HoldWait => "Hold / Wait",
            Advice::CautiousBuy => "Cautious Buy",
            Advice::StrongBuy => "Strong Buy",
        };
        f.write_str(label)
    }
}

/// Threshold ladder, walked top-down; the first lower bound met wins.
pub const ADVICE_LADDER: [(usize, Advice); 4] = [
    (5, Advice::StrongBuy),
    (3, Advice::CautiousBuy),
    (1, Advice::HoldWait),
    (0, Advice::DoNotEnter),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub advice: Advice,
    pub positive_signals: usize,
    pub total_indicators: usize,
}

/// Grade a signal set.
///
/// An empty set means the evaluation could not run at all; that maps to
/// Hold / Wait with zero counts rather than Do Not Enter.
pub fn recommend(signals: &SignalSet) -> Recommendation {
    if signals.is_empty() {
        return Recommendation {
            advice: Advice::HoldWait,
            positive_signals: 0,
            total_indicators: 0,
        };
    }

    let positive = signals.positive_count();
    Recommendation {
        advice: grade(positive),
        positive_signals: positive,
        total_indicators: signals.len(),
    }
}

fn grade(positive: usize) -> Advice {
    for (lower_bound, advice) in ADVICE_LADDER {
        if positive >= lower_bound {
            return advice;
        }
    }
    Advice::DoNotEnter
}
