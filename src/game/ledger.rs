use crate::Carry;
use crate::Money;
use crate::game::hole::Hole;
use crate::game::roster::Roster;
use crate::game::rules::Rules;
use crate::game::showdown::Ruling;
use crate::game::showdown::Showdown;

/// The settled book for a match: one dense delta row per hole over the
/// active players, plus column totals.
///
/// Produced by a single left-fold over the hole list with the carry counter
/// as the only threaded state, so recomputing from hole 1 on the same inputs
/// is deterministic and identical. Decided rows sum to zero; pushed and dead
/// rows are all-zero, with the carry tracked outside the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    rows: Vec<Vec<Money>>,
    totals: Vec<Money>,
}

impl Ledger {
    /// Settle a full match. Holes are processed strictly in order; pushed
    /// holes extend the carry (when the rules carry), dead holes leave it
    /// alone, decided holes spend it and reset it to zero.
    pub fn tally(roster: &Roster, rules: &Rules, holes: &[Hole]) -> Self {
        let slots = roster.actives();
        let mut totals = vec![0.0; slots.len()];
        let mut carry: Carry = 0;
        let mut rows = Vec::with_capacity(holes.len());
        for hole in holes {
            let outcome = Showdown::from((hole, rules, carry, slots)).settle();
            carry = match outcome.ruling {
                Ruling::Decided => 0,
                Ruling::Pushed if rules.carrying => carry + 1,
                Ruling::Pushed | Ruling::Dead => carry,
            };
            for (player, delta) in outcome.deltas.iter().enumerate() {
                totals[player] += delta;
            }
            rows.push(outcome.deltas);
        }
        Self { rows, totals }
    }

    /// Per-hole delta rows, dense over active players, in hole order.
    pub fn rows(&self) -> &[Vec<Money>] {
        &self.rows
    }
    pub fn row(&self, hole: usize) -> &[Money] {
        &self.rows[hole]
    }
    pub fn delta(&self, hole: usize, player: usize) -> Money {
        self.rows[hole][player]
    }
    /// Running totals per active player. Always sums to zero.
    pub fn totals(&self) -> &[Money] {
        &self.totals
    }
}
