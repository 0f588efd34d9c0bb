use crate::Carry;
use crate::Money;
use crate::Strokes;

/// How one hole resolved, from the carry counter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruling {
    /// Money moved. Resets the carry.
    Decided,
    /// Tied at the top. Extends the carry when carrying is on.
    Pushed,
    /// Undecidable: nobody played, or nobody who played recorded a score.
    /// Leaves the carry alone.
    Dead,
}

/// One settled hole: a dense per-active delta row plus its ruling. Rows sum
/// to zero for decided holes and are all-zero otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub deltas: Vec<Money>,
    pub ruling: Ruling,
}

impl Outcome {
    fn unmoved(actives: usize, ruling: Ruling) -> Self {
        Self {
            deltas: vec![0.0; actives],
            ruling,
        }
    }
}

/// Ephemeral per-hole settler. Takes the hole, the rules, the carry walking
/// in, and the match's ordered active slots; consumed by [`Self::settle`].
/// Every edge case (missing strokes, unrecorded sides, top-score ties) lands
/// on a zero row rather than an error.
pub struct Showdown<'a> {
    hole: &'a Hole,
    rules: &'a Rules,
    carry: Carry,
    slots: &'a [usize],
    split: Split,
}

impl<'a> From<(&'a Hole, &'a Rules, Carry, &'a [usize])> for Showdown<'a> {
    fn from((hole, rules, carry, slots): (&'a Hole, &'a Rules, Carry, &'a [usize])) -> Self {
        Self {
            hole,
            rules,
            carry,
            slots,
            split: Split::from((hole, slots)),
        }
    }
}

impl Showdown<'_> {
    pub fn settle(self) -> Outcome {
        match self.split.shape() {
            Shape::Dead => Outcome::unmoved(self.slots.len(), Ruling::Dead),
            Shape::Solo => self.solo(),
            Shape::Sides => self.sides(),
        }
    }

    /// Everyone in the lone side plays for themselves; the unique lowest
    /// score sweeps the full stake from each other member. Never split.
    fn solo(self) -> Outcome {
        let field = self.split.solo();
        let best = match self.best(field) {
            Some(best) => best,
            None => return Outcome::unmoved(self.slots.len(), Ruling::Dead),
        };
        let winners = self.holders(field, best);
        if winners.len() > 1 {
            return Outcome::unmoved(self.slots.len(), Ruling::Pushed);
        }
        let winner = winners[0];
        let stake = Stake::from((best, self.hole, self.carry, self.rules)).amount();
        let mut deltas = vec![0.0; self.slots.len()];
        for &player in field.iter().filter(|p| **p != winner) {
            deltas[player] = -stake;
            deltas[winner] += stake;
        }
        Outcome {
            deltas,
            ruling: Ruling::Decided,
        }
    }

    /// Side best against side best. Payout legs scale by membership so that
    /// gains and losses balance for any W-vs-L split: the smaller side's leg
    /// is inflated by the size ratio, the larger side's leg stays flat.
    fn sides(self) -> Outcome {
        let (best_a, best_b) = match (self.best(self.split.a()), self.best(self.split.b())) {
            (Some(a), Some(b)) => (a, b),
            _ => return Outcome::unmoved(self.slots.len(), Ruling::Dead),
        };
        if best_a == best_b {
            return Outcome::unmoved(self.slots.len(), Ruling::Pushed);
        }
        let (winners, losers, best) = if best_a < best_b {
            (self.split.a(), self.split.b(), best_a)
        } else {
            (self.split.b(), self.split.a(), best_b)
        };
        let stake = Stake::from((best, self.hole, self.carry, self.rules)).amount();
        let w = winners.len() as Money;
        let l = losers.len() as Money;
        let mut gain = if w >= l { stake } else { stake * l / w };
        let mut loss = if w > l { stake * w / l } else { stake };
        if self.rules.upset_doubles && winners.len() == 1 && losers.len() >= 2 {
            gain *= 2.0;
            loss *= 2.0;
        }
        let mut deltas = vec![0.0; self.slots.len()];
        for &player in winners {
            deltas[player] = gain;
        }
        for &player in losers {
            deltas[player] = -loss;
        }
        Outcome {
            deltas,
            ruling: Ruling::Decided,
        }
    }

    /// Lowest recorded score among the given members; `None` when the whole
    /// membership went unrecorded. Missing strokes never win.
    fn best(&self, members: &[usize]) -> Option<Strokes> {
        members
            .iter()
            .filter_map(|dense| self.recorded(*dense))
            .min()
    }
    fn holders(&self, members: &[usize], best: Strokes) -> Vec<usize> {
        members
            .iter()
            .copied()
            .filter(|dense| self.recorded(*dense) == Some(best))
            .collect()
    }
    fn recorded(&self, dense: usize) -> Option<Strokes> {
        self.hole.strokes(self.slots[dense])
    }
}

use super::hole::Hole;
use super::rules::Rules;
use super::split::Shape;
use super::split::Split;
use super::stake::Stake;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SEATS;
    use crate::game::side::Side;

    const EPSILON: Money = 1e-6;

    fn rules() -> Rules {
        Rules {
            wager: 1.0,
            carrying: true,
            birdie_doubles: false,
            eagle_triples: false,
            upset_doubles: false,
        }
    }
    fn score(strokes: &[Strokes]) -> [Option<Strokes>; SEATS] {
        let mut row = [None; SEATS];
        for (slot, s) in strokes.iter().enumerate() {
            row[slot] = Some(*s);
        }
        row
    }
    fn settle(hole: &Hole, rules: &Rules, carry: Carry, slots: &[usize]) -> Outcome {
        Showdown::from((hole, rules, carry, slots)).settle()
    }
    fn zero_sum(outcome: &Outcome) {
        assert!(outcome.deltas.iter().sum::<Money>().abs() < EPSILON);
    }

    #[test]
    fn solo_unique_low_sweeps_full_stakes() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::A, Side::A, Side::Out],
            score(&[5, 3, 6, 4]),
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2, 3]);
        assert_eq!(outcome.ruling, Ruling::Decided);
        assert_eq!(outcome.deltas, vec![-1.0, 3.0, -1.0, -1.0]);
        zero_sum(&outcome);
    }

    #[test]
    fn solo_tied_low_pushes() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::A, Side::Out, Side::Out],
            score(&[3, 3, 5]),
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2]);
        assert_eq!(outcome.ruling, Ruling::Pushed);
        assert_eq!(outcome.deltas, vec![0.0; 3]);
    }

    #[test]
    fn solo_unrecorded_member_never_wins_still_pays() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::A, Side::Out, Side::Out],
            [Some(4), None, Some(5), None, None],
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2]);
        assert_eq!(outcome.ruling, Ruling::Decided);
        assert_eq!(outcome.deltas, vec![2.0, -1.0, -1.0]);
    }

    #[test]
    fn solo_wholly_unrecorded_is_dead() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::Out, Side::Out, Side::Out],
            [None; SEATS],
        );
        let outcome = settle(&hole, &rules(), 3, &[0, 1]);
        assert_eq!(outcome.ruling, Ruling::Dead);
        assert_eq!(outcome.deltas, vec![0.0; 2]);
    }

    #[test]
    fn sides_even_split_flat_legs() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::B, Side::B, Side::Out],
            score(&[4, 5, 5, 6]),
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2, 3]);
        assert_eq!(outcome.deltas, vec![1.0, 1.0, -1.0, -1.0]);
        zero_sum(&outcome);
    }

    #[test]
    fn sides_outnumbered_winners_scale_up() {
        // 2 winners vs 3 losers: each winner takes stake * 3/2
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::B, Side::B, Side::B],
            score(&[4, 5, 5, 6, 7]),
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2, 3, 4]);
        assert_eq!(outcome.deltas, vec![1.5, 1.5, -1.0, -1.0, -1.0]);
        zero_sum(&outcome);
    }

    #[test]
    fn sides_outnumbered_losers_scale_up() {
        // 3 winners vs 2 losers: each loser pays stake * 3/2
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::A, Side::B, Side::B],
            score(&[4, 5, 6, 5, 6]),
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2, 3, 4]);
        assert_eq!(outcome.deltas, vec![1.0, 1.0, 1.0, -1.5, -1.5]);
        zero_sum(&outcome);
    }

    #[test]
    fn sides_equal_bests_push() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::B, Side::B, Side::Out],
            score(&[4, 6, 4, 7]),
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2, 3]);
        assert_eq!(outcome.ruling, Ruling::Pushed);
        assert_eq!(outcome.deltas, vec![0.0; 4]);
    }

    #[test]
    fn sides_unrecorded_side_is_dead() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::B, Side::B, Side::Out],
            [Some(4), Some(5), None, None, None],
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2, 3]);
        assert_eq!(outcome.ruling, Ruling::Dead);
        assert_eq!(outcome.deltas, vec![0.0; 4]);
    }

    #[test]
    fn lone_winner_doubles_when_upsets_pay() {
        let mut rules = rules();
        rules.upset_doubles = true;
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::B, Side::B, Side::B, Side::Out],
            score(&[4, 5, 6, 7]),
        );
        let outcome = settle(&hole, &rules, 0, &[0, 1, 2, 3]);
        // baseline: gain = 3/1, loss = 1; doubled: +6 / -2 each
        assert_eq!(outcome.deltas, vec![6.0, -2.0, -2.0, -2.0]);
        zero_sum(&outcome);
    }

    #[test]
    fn two_member_minority_does_not_trigger_upset() {
        let mut rules = rules();
        rules.upset_doubles = true;
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::B, Side::B, Side::B],
            score(&[4, 5, 5, 6, 7]),
        );
        let outcome = settle(&hole, &rules, 0, &[0, 1, 2, 3, 4]);
        assert_eq!(outcome.deltas, vec![1.5, 1.5, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn lone_winner_without_flag_keeps_baseline() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::B, Side::B, Side::B, Side::Out],
            score(&[4, 5, 6, 7]),
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2, 3]);
        assert_eq!(outcome.deltas, vec![3.0, -1.0, -1.0, -1.0]);
        zero_sum(&outcome);
    }

    #[test]
    fn out_players_always_get_zero() {
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::A, Side::Out, Side::Out, Side::Out],
            score(&[4, 5, 2, 2, 2]),
        );
        let outcome = settle(&hole, &rules(), 0, &[0, 1, 2, 3, 4]);
        assert_eq!(outcome.deltas[2..], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn multiplier_reads_winning_side_only() {
        let mut rules = rules();
        rules.birdie_doubles = true;
        // winner at par, loser way over: no boost from the loser's blowup
        let hole = Hole::new(
            Some(4),
            [Side::A, Side::B, Side::Out, Side::Out, Side::Out],
            score(&[4, 9]),
        );
        let outcome = settle(&hole, &rules, 0, &[0, 1]);
        assert_eq!(outcome.deltas, vec![1.0, -1.0]);
    }
}
