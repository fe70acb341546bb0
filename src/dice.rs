//! Dice rolls for character generation.
//!
//! One `DiceRoller` owns the random generator for the whole process and is
//! passed by `&mut` to whoever needs a roll, so tests can seed it.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::CreationError;

// =============================================================================
// Dice
// =============================================================================

/// `quantity` dice with `sides` faces each, e.g. 3d6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    quantity: u32,
    sides: u32,
}

impl Dice {
    pub fn new(quantity: u32, sides: u32) -> Result<Self, CreationError> {
        if sides == 0 {
            return Err(CreationError::invalid_dice(
                format!("{quantity}d{sides}"),
                "a die needs at least one side",
            ));
        }
        if !Self::total_fits(quantity, sides) {
            return Err(CreationError::invalid_dice(
                format!("{quantity}d{sides}"),
                format!("the largest total must not exceed {}", i32::MAX),
            ));
        }
        Ok(Dice { quantity, sides })
    }

    /// For dice known at compile time; an invalid constant fails the build.
    pub const fn fixed(quantity: u32, sides: u32) -> Self {
        assert!(sides > 0, "a die needs at least one side");
        assert!(Self::total_fits(quantity, sides), "dice total out of range");
        Dice { quantity, sides }
    }

    // Every total must fit in an i32 so rolls convert to scores losslessly.
    const fn total_fits(quantity: u32, sides: u32) -> bool {
        quantity as u64 * sides as u64 <= i32::MAX as u64
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Smallest and largest possible totals.
    pub fn range(&self) -> RangeInclusive<u32> {
        self.quantity..=self.quantity * self.sides
    }

    /// Sum of `quantity` independent draws from `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let face = Uniform::new_inclusive(1, self.sides);
        (0..self.quantity).map(|_| face.sample(rng)).sum()
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.quantity, self.sides)
    }
}

impl FromStr for Dice {
    type Err = CreationError;

    /// Accepts `NdS` or `dS` (one die).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (quantity, sides) = text
            .split_once(['d', 'D'])
            .ok_or_else(|| CreationError::invalid_dice(s, "expected NdS notation"))?;

        let quantity = if quantity.trim().is_empty() {
            1
        } else {
            quantity
                .trim()
                .parse::<u32>()
                .map_err(|err| CreationError::invalid_dice(s, format!("bad quantity: {err}")))?
        };
        let sides = sides
            .trim()
            .parse::<u32>()
            .map_err(|err| CreationError::invalid_dice(s, format!("bad sides: {err}")))?;

        Dice::new(quantity, sides)
    }
}

/// Roll `quantity` dice of `sides` faces with the given generator.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, quantity: u32, sides: u32) -> Result<u32, CreationError> {
    Ok(Dice::new(quantity, sides)?.roll(rng))
}

// =============================================================================
// Ability rolls: a flat offset plus optional dice
// =============================================================================

/// `offset + dice`, written as `12+1d6`, `3d6`, `10` or `8-1d4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct AbilityRoll {
    offset: i32,
    dice: Option<Dice>,
    subtract: bool,
}

impl AbilityRoll {
    pub fn new(offset: i32, dice: Dice) -> Result<Self, CreationError> {
        Self::checked(offset, dice, false)
    }

    /// `offset - dice`.
    pub fn penalty(offset: i32, dice: Dice) -> Result<Self, CreationError> {
        Self::checked(offset, dice, true)
    }

    // Both ends of the range must be representable, so rolls never wrap.
    fn checked(offset: i32, dice: Dice, subtract: bool) -> Result<Self, CreationError> {
        let high = *dice.range().end() as i32;
        let bound = if subtract {
            offset.checked_sub(high)
        } else {
            offset.checked_add(high)
        };

        if bound.is_none() {
            let sign = if subtract { '-' } else { '+' };
            return Err(CreationError::invalid_dice(
                format!("{offset}{sign}{dice}"),
                "score range does not fit in a 32-bit integer",
            ));
        }

        Ok(AbilityRoll {
            offset,
            dice: Some(dice),
            subtract,
        })
    }

    pub fn flat(value: i32) -> Self {
        AbilityRoll {
            offset: value,
            dice: None,
            subtract: false,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn dice(&self) -> Option<Dice> {
        self.dice
    }

    pub fn range(&self) -> RangeInclusive<i32> {
        let Some(dice) = self.dice else {
            return self.offset..=self.offset;
        };
        let low = *dice.range().start() as i32;
        let high = *dice.range().end() as i32;
        if self.subtract {
            self.offset - high..=self.offset - low
        } else {
            self.offset + low..=self.offset + high
        }
    }

    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        match self.dice {
            None => self.offset,
            Some(dice) if self.subtract => self.offset - dice.roll(rng) as i32,
            Some(dice) => self.offset + dice.roll(rng) as i32,
        }
    }
}

impl fmt::Display for AbilityRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.offset, self.dice) {
            (offset, None) => write!(f, "{offset}"),
            (0, Some(dice)) if !self.subtract => write!(f, "{dice}"),
            (offset, Some(dice)) => {
                let sign = if self.subtract { '-' } else { '+' };
                write!(f, "{offset}{sign}{dice}")
            }
        }
    }
}

impl FromStr for AbilityRoll {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if text.is_empty() {
            return Err(CreationError::invalid_dice(s, "empty ability roll"));
        }

        if !text.contains(['d', 'D']) {
            let value = text
                .parse::<i32>()
                .map_err(|err| CreationError::invalid_dice(s, format!("bad offset: {err}")))?;
            return Ok(AbilityRoll::flat(value));
        }

        // A leading sign belongs to the offset, not the operator.
        let operator = text
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '+' || *c == '-');

        let Some((at, op)) = operator else {
            return AbilityRoll::new(0, text.parse()?);
        };

        let offset = text[..at]
            .parse::<i32>()
            .map_err(|err| CreationError::invalid_dice(s, format!("bad offset: {err}")))?;
        let dice: Dice = text[at + 1..].parse()?;

        Self::checked(offset, dice, op == '-')
    }
}

impl TryFrom<String> for AbilityRoll {
    type Error = CreationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Process-wide roller
// =============================================================================

pub struct DiceRoller<R: Rng = StdRng> {
    rng: R,
}

impl DiceRoller<StdRng> {
    pub fn from_entropy() -> Self {
        DiceRoller::new(StdRng::from_entropy())
    }

    /// Same seed, same rolls.
    pub fn seeded(seed: u64) -> Self {
        DiceRoller::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiceRoller<R> {
    pub fn new(rng: R) -> Self {
        DiceRoller { rng }
    }

    pub fn roll(&mut self, dice: Dice) -> u32 {
        dice.roll(&mut self.rng)
    }

    pub fn roll_ability(&mut self, ability: &AbilityRoll) -> i32 {
        ability.roll(&mut self.rng)
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }
}

// =============================================================================
// Tests
// =============================================================================
