use crate::game::hole::Hole;
use crate::game::side::Side;

/// How a hole's membership shakes out, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Exactly one side populated: everyone in it plays head-to-head.
    Solo,
    /// Both sides populated: side best against side best.
    Sides,
    /// Neither side populated. Nothing to settle, carry untouched.
    /// Not a tie.
    Dead,
}

/// A hole's membership split over the dense active list: ordered active
/// indices per side. Pure function of the hole and the active slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    a: Vec<usize>,
    b: Vec<usize>,
}

impl Split {
    pub fn a(&self) -> &[usize] {
        &self.a
    }
    pub fn b(&self) -> &[usize] {
        &self.b
    }
    pub fn shape(&self) -> Shape {
        match (self.a.is_empty(), self.b.is_empty()) {
            (false, false) => Shape::Sides,
            (true, true) => Shape::Dead,
            _ => Shape::Solo,
        }
    }
    /// The populated side of a Solo hole.
    pub fn solo(&self) -> &[usize] {
        if self.a.is_empty() { &self.b } else { &self.a }
    }
}

impl From<(&Hole, &[usize])> for Split {
    fn from((hole, actives): (&Hole, &[usize])) -> Self {
        let members = |side: Side| {
            actives
                .iter()
                .enumerate()
                .filter(|(_, slot)| hole.side(**slot) == side)
                .map(|(dense, _)| dense)
                .collect::<Vec<usize>>()
        };
        Self {
            a: members(Side::A),
            b: members(Side::B),
        }
    }
}
