use crate::DEFAULT_PAR;
use crate::MIN_PAR;
use crate::Par;
use crate::SEATS;
use crate::Strokes;
use crate::game::side::Side;

/// One scored unit of play: a target value, a per-slot side assignment, and
/// per-slot recorded strokes. `None` strokes means the player never submitted
/// a score for this hole; they are excluded from comparisons, never from the
/// roster. That conversion happens here, once, at ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole {
    par: Par,
    sides: [Side; SEATS],
    strokes: [Option<Strokes>; SEATS],
}

impl Hole {
    /// Build a hole, clamping the target: absent or sub-minimum par falls
    /// back to the default rather than failing.
    pub fn new(par: Option<Par>, sides: [Side; SEATS], strokes: [Option<Strokes>; SEATS]) -> Self {
        Self {
            par: par.filter(|p| *p >= MIN_PAR).unwrap_or(DEFAULT_PAR),
            sides,
            strokes,
        }
    }
    pub fn par(&self) -> Par {
        self.par
    }
    pub fn side(&self, slot: usize) -> Side {
        self.sides[slot]
    }
    pub fn strokes(&self, slot: usize) -> Option<Strokes> {
        self.strokes[slot]
    }
}
