use crate::Par;
use crate::SEATS;
use crate::Strokes;
use crate::game::Hole;
use crate::game::Roster;
use crate::game::Rules;
use crate::game::Side;

/// One hole as the caller records it. Slots beyond the supplied lengths sit
/// out with no score; a par under the legal minimum reads as unset.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct HoleSheet {
    #[serde(default)]
    pub par: Option<Par>,
    #[serde(default)]
    pub sides: Vec<Side>,
    #[serde(default)]
    pub strokes: Vec<Option<Strokes>>,
}

impl From<&HoleSheet> for Hole {
    fn from(sheet: &HoleSheet) -> Self {
        let mut sides = [Side::Out; SEATS];
        for (slot, side) in sheet.sides.iter().take(SEATS).enumerate() {
            sides[slot] = *side;
        }
        let mut strokes = [None; SEATS];
        for (slot, s) in sheet.strokes.iter().take(SEATS).enumerate() {
            strokes[slot] = *s;
        }
        Hole::new(sheet.par, sides, strokes)
    }
}

/// A full match as submitted by the caller: who is playing, under what
/// rules, and the ordered hole records.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub holes: Vec<HoleSheet>,
}

impl Sheet {
    pub fn roster(&self) -> Roster {
        let mut names: [String; SEATS] = Default::default();
        for (slot, name) in self.players.iter().take(SEATS).enumerate() {
            names[slot] = name.clone();
        }
        Roster::from(names)
    }
    pub fn holes(&self) -> Vec<Hole> {
        self.holes.iter().map(Hole::from).collect()
    }
}
