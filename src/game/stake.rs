use crate::Carry;
use crate::Money;
use crate::Strokes;
use crate::game::hole::Hole;
use crate::game::rules::Rules;

/// The unit at stake for one decisive hole: wager, carry inflation, and the
/// result multiplier earned by the winning score against par. The losing
/// side's performance never enters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stake {
    unit: Money,
    carried: Carry,
    multiplier: Money,
}

impl Stake {
    pub fn amount(&self) -> Money {
        self.unit * (1 + self.carried) as Money * self.multiplier
    }
    pub fn multiplier(&self) -> Money {
        self.multiplier
    }

    /// Triple outranks double when both are numerically satisfied; neither
    /// applies unless the winning score is strictly below par.
    fn boost(best: Strokes, hole: &Hole, rules: &Rules) -> Money {
        let under = hole.par() as i16 - best as i16;
        if rules.eagle_triples && under >= 2 {
            3.0
        } else if rules.birdie_doubles && under == 1 {
            2.0
        } else {
            1.0
        }
    }
}

impl From<(Strokes, &Hole, Carry, &Rules)> for Stake {
    fn from((best, hole, carry, rules): (Strokes, &Hole, Carry, &Rules)) -> Self {
        Self {
            unit: rules.wager,
            carried: if rules.carrying { carry } else { 0 },
            multiplier: Self::boost(best, hole, rules),
        }
    }
}
