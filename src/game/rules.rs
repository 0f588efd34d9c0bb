use crate::Money;

/// House rules for a match. Fixed once play begins; every hole settles under
/// the same record.
///
/// Booleans deliberately carry no engine-side opinion: a caller that omits
/// them gets `false` via serde defaults, which is the documented behavior.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rules {
    /// Base monetary unit at stake per hole. Non-negative.
    #[serde(default = "Rules::unit")]
    pub wager: Money,
    /// Pushed holes inflate the next decisive stake by one unit each.
    #[serde(default)]
    pub carrying: bool,
    /// Winning score of exactly one under par doubles the stake.
    #[serde(default)]
    pub birdie_doubles: bool,
    /// Winning score of two or more under par triples the stake.
    #[serde(default)]
    pub eagle_triples: bool,
    /// A lone winner beating a side of two or more doubles both legs.
    #[serde(default)]
    pub upset_doubles: bool,
}

impl Rules {
    fn unit() -> Money {
        1.0
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            wager: Self::unit(),
            carrying: false,
            birdie_doubles: false,
            eagle_triples: false,
            upset_doubles: false,
        }
    }
}
