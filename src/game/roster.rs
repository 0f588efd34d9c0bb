use crate::SEATS;

/// The scorecard's ordered player slots, fixed for a whole match.
///
/// A slot is active iff its trimmed name is non-empty. Slot indices are
/// stable and caller-facing; the engine works over the dense active list
/// (0..actives.len()) computed once here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: [String; SEATS],
    actives: Vec<usize>,
}

impl Roster {
    pub fn names(&self) -> &[String; SEATS] {
        &self.names
    }
    /// Ordered slot indices of active players.
    pub fn actives(&self) -> &[usize] {
        &self.actives
    }
    pub fn count(&self) -> usize {
        self.actives.len()
    }
    pub fn name(&self, slot: usize) -> &str {
        self.names[slot].trim()
    }
}

impl From<[String; SEATS]> for Roster {
    fn from(names: [String; SEATS]) -> Self {
        let actives = names
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.trim().is_empty())
            .map(|(slot, _)| slot)
            .collect();
        Self { names, actives }
    }
}

impl From<&[&str]> for Roster {
    fn from(names: &[&str]) -> Self {
        let mut slots: [String; SEATS] = Default::default();
        for (slot, name) in names.iter().take(SEATS).enumerate() {
            slots[slot] = name.to_string();
        }
        Self::from(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_slots_are_inactive() {
        let roster = Roster::from(["Ann", "", "  ", "Dan"].as_slice());
        assert_eq!(roster.actives(), &[0, 3]);
        assert_eq!(roster.count(), 2);
    }

    #[test]
    fn active_order_follows_slot_order() {
        let roster = Roster::from(["", "Bea", "Cal", "", "Eve"].as_slice());
        assert_eq!(roster.actives(), &[1, 2, 4]);
    }
}
