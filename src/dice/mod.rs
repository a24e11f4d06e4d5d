//! The five dice of a game and the selection of dice to reroll.

mod set;

pub use set::{DiceSelection, DiceSet, Die, DICE_COUNT};
