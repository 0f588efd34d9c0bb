use crate::Money;
use crate::game::Ledger;
use crate::game::Roster;

/// The settled book, shaped for display: active player names, per-hole delta
/// rows, and totals, all rounded to the 2 decimals callers render.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tab {
    pub players: Vec<String>,
    pub rows: Vec<Vec<Money>>,
    pub totals: Vec<Money>,
}

fn cents(amount: Money) -> Money {
    (amount * 100.0).round() / 100.0
}

impl From<(&Roster, &Ledger)> for Tab {
    fn from((roster, ledger): (&Roster, &Ledger)) -> Self {
        Self {
            players: roster
                .actives()
                .iter()
                .map(|slot| roster.name(*slot).to_string())
                .collect(),
            rows: ledger
                .rows()
                .iter()
                .map(|row| row.iter().copied().map(cents).collect())
                .collect(),
            totals: ledger.totals().iter().copied().map(cents).collect(),
        }
    }
}
