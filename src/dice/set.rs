//! Dice set and reroll selection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DiceSource, YambError, YambResult, DIE_FACES};

/// Dice per game.
pub const DICE_COUNT: usize = 5;

/// A single die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDie")]
pub struct Die {
    /// Face value, `1..=6`.
    pub value: u8,

    /// Kept out of the last reroll.
    pub held: bool,
}

/// Unchecked wire form of a die.
#[derive(Deserialize)]
struct RawDie {
    value: u8,
    held: bool,
}

impl TryFrom<RawDie> for Die {
    type Error = YambError;

    fn try_from(raw: RawDie) -> Result<Self, Self::Error> {
        if !(1..=DIE_FACES).contains(&raw.value) {
            return Err(YambError::Checkpoint(format!(
                "die value {} out of range",
                raw.value
            )));
        }
        Ok(Self {
            value: raw.value,
            held: raw.held,
        })
    }
}

impl Default for Die {
    fn default() -> Self {
        Self {
            value: DIE_FACES,
            held: false,
        }
    }
}

/// The five dice of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; DICE_COUNT],
}

impl DiceSet {
    /// Five unheld dice showing six.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dice with the given values, all unheld.
    #[must_use]
    pub fn from_values(values: [u8; DICE_COUNT]) -> Self {
        debug_assert!(values.iter().all(|v| (1..=DIE_FACES).contains(v)));
        Self {
            dice: values.map(|value| Die { value, held: false }),
        }
    }

    /// All dice.
    #[must_use]
    pub fn dice(&self) -> &[Die; DICE_COUNT] {
        &self.dice
    }

    /// Face values in die order.
    #[must_use]
    pub fn values(&self) -> [u8; DICE_COUNT] {
        self.dice.map(|d| d.value)
    }

    /// Reroll the selected dice.
    ///
    /// Rolled dice become unheld; every other die is marked held.
    pub fn roll(&mut self, selection: &DiceSelection, source: &mut dyn DiceSource) {
        for (index, die) in self.dice.iter_mut().enumerate() {
            if selection.contains(index) {
                die.value = source.next_value();
                die.held = false;
            } else {
                die.held = true;
            }
        }
    }

    /// Clear every held flag, keeping values.
    pub fn release(&mut self) {
        for die in &mut self.dice {
            die.held = false;
        }
    }
}

/// Indices of dice to roll: sorted, unique, each in `0..5`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct DiceSelection(SmallVec<[u8; DICE_COUNT]>);

impl DiceSelection {
    /// Every die.
    #[must_use]
    pub fn all() -> Self {
        Self((0..DICE_COUNT as u8).collect())
    }

    /// No dice.
    #[must_use]
    pub fn none() -> Self {
        Self(SmallVec::new())
    }

    /// Build a selection from die indices; duplicates collapse.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> YambResult<Self> {
        let mut selected: SmallVec<[u8; DICE_COUNT]> = SmallVec::new();
        for index in indices {
            if index >= DICE_COUNT {
                return Err(YambError::InvalidCommandForState {
                    reason: "die index out of range",
                });
            }
            selected.push(index as u8);
        }
        selected.sort_unstable();
        selected.dedup();
        Ok(Self(selected))
    }

    /// Is die `index` selected?
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.iter().any(|&i| i as usize == index)
    }

    /// Number of selected dice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no dice are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&i| i as usize)
    }
}

impl TryFrom<Vec<usize>> for DiceSelection {
    type Error = YambError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_indices(indices)
    }
}

impl From<DiceSelection> for Vec<usize> {
    fn from(selection: DiceSelection) -> Self {
        selection.indices().collect()
    }
}

impl std::fmt::Display for DiceSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indices: Vec<usize> = self.indices().collect();
        write!(f, "{:?}", indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;

    #[test]
    fn test_new_dice() {
        let dice = DiceSet::new();
        assert_eq!(dice.values(), [6; 5]);
        assert!(dice.dice().iter().all(|d| !d.held));
    }

    #[test]
    fn test_roll_all() {
        let mut dice = DiceSet::new();
        let mut source = ScriptedDice::new([1, 2, 3, 4, 5]);

        dice.roll(&DiceSelection::all(), &mut source);

        assert_eq!(dice.values(), [1, 2, 3, 4, 5]);
        assert!(dice.dice().iter().all(|d| !d.held));
    }

    #[test]
    fn test_roll_subset_holds_rest() {
        let mut dice = DiceSet::from_values([3, 3, 3, 1, 2]);
        let mut source = ScriptedDice::new([3, 6]);

        let selection = DiceSelection::from_indices([3, 4]).unwrap();
        dice.roll(&selection, &mut source);

        assert_eq!(dice.values(), [3, 3, 3, 3, 6]);
        let held: Vec<bool> = dice.dice().iter().map(|d| d.held).collect();
        assert_eq!(held, vec![true, true, true, false, false]);
        assert_eq!(source.drawn(), 2);
    }

    #[test]
    fn test_release() {
        let mut dice = DiceSet::from_values([1, 1, 1, 1, 1]);
        let mut source = ScriptedDice::new([2]);
        dice.roll(&DiceSelection::none(), &mut source);
        assert!(dice.dice().iter().all(|d| d.held));

        dice.release();
        assert!(dice.dice().iter().all(|d| !d.held));
        assert_eq!(dice.values(), [1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_selection_dedup_and_sort() {
        let selection = DiceSelection::from_indices([4, 0, 4, 2]).unwrap();
        assert_eq!(selection.indices().collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(selection.len(), 3);
        assert!(selection.contains(2));
        assert!(!selection.contains(1));
    }

    #[test]
    fn test_selection_out_of_range() {
        let err = DiceSelection::from_indices([1, 5]).unwrap_err();
        assert_eq!(
            err,
            YambError::InvalidCommandForState {
                reason: "die index out of range"
            }
        );
    }

    #[test]
    fn test_die_value_checked_on_decode() {
        let die: Die = serde_json::from_str(r#"{"value":4,"held":true}"#).unwrap();
        assert_eq!(die, Die { value: 4, held: true });

        assert!(serde_json::from_str::<Die>(r#"{"value":9,"held":false}"#).is_err());
        assert!(serde_json::from_str::<Die>(r#"{"value":0,"held":false}"#).is_err());
    }

    #[test]
    fn test_selection_serde() {
        let selection = DiceSelection::from_indices([1, 3]).unwrap();
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, "[1,3]");

        let deserialized: DiceSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(selection, deserialized);

        assert!(serde_json::from_str::<DiceSelection>("[0,9]").is_err());
    }
}
