use std::fmt::{Display, Formatter};

use strum::{Display as StrumDisplay, VariantArray};

/// Amount of water, in whole units.
pub type Amount = u32;

/// The water levels of jugs A and B, in that order.
///
/// Also used to express capacities, in which case each field is the most that jug can hold.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Jugs {
    /// Jug A.
    pub a: Amount,
    /// Jug B.
    pub b: Amount,
}

impl Jugs {
    /// Jug A holding `a` and jug B holding `b`.
    #[inline]
    pub const fn new(a: Amount, b: Amount) -> Self {
        Self { a, b }
    }

    /// `true` if either jug holds exactly `amount`.
    #[inline]
    pub fn holds(&self, amount: Amount) -> bool {
        self.a == amount || self.b == amount
    }

    /// `true` if neither jug holds more than the corresponding amount in `capacity`.
    #[inline]
    pub fn fits(&self, capacity: Jugs) -> bool {
        self.a <= capacity.a && self.b <= capacity.b
    }
}

impl From<(Amount, Amount)> for Jugs {
    fn from(value: (Amount, Amount)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for Jugs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// The six moves available from any state.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, VariantArray, StrumDisplay)]
pub enum Pour {
    /// Pour jug A out onto the ground.
    #[strum(to_string = "empty A")]
    EmptyA,
    /// Pour jug B out onto the ground.
    #[strum(to_string = "empty B")]
    EmptyB,
    /// Fill jug A from the tap.
    #[strum(to_string = "fill A")]
    FillA,
    /// Fill jug B from the tap.
    #[strum(to_string = "fill B")]
    FillB,
    /// Pour A into B until A is empty or B is full, whichever comes first.
    #[strum(to_string = "pour A into B")]
    PourAIntoB,
    /// Pour B into A until B is empty or A is full, whichever comes first.
    #[strum(to_string = "pour B into A")]
    PourBIntoA,
}

impl Pour {
    /// The state reached by making this move from `state`, with jug sizes given by `capacity`.
    ///
    /// `state` is assumed to fit in `capacity`; the result then does as well.
    /// A move may leave the state unchanged, e.g. emptying an empty jug.
    pub fn apply(self, state: Jugs, capacity: Jugs) -> Jugs {
        let Jugs { a, b } = state;
        match self {
            Self::EmptyA => Jugs::new(0, b),
            Self::EmptyB => Jugs::new(a, 0),
            Self::FillA => Jugs::new(capacity.a, b),
            Self::FillB => Jugs::new(a, capacity.b),
            Self::PourAIntoB => Jugs::new(
                a.saturating_sub(capacity.b.saturating_sub(b)),
                capacity.b.min(a.saturating_add(b)),
            ),
            Self::PourBIntoA => Jugs::new(
                capacity.a.min(a.saturating_add(b)),
                b.saturating_sub(capacity.a.saturating_sub(a)),
            ),
        }
    }
}

/// A two-jug puzzle: jugs of fixed capacity, a tap, and the ground.
///
/// States form an implicit graph whose edges are the [`Pour`] moves; see [`JugPuzzle::solve`] to search it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct JugPuzzle {
    capacity: Jugs,
}

impl JugPuzzle {
    /// A puzzle with jugs holding at most `capacity_a` and `capacity_b`.
    pub fn new(capacity_a: Amount, capacity_b: Amount) -> Self {
        Self { capacity: Jugs::new(capacity_a, capacity_b) }
    }

    /// Capacities of both jugs.
    #[inline]
    pub fn capacity(&self) -> Jugs {
        self.capacity
    }

    /// `true` if `state` is a valid state of this puzzle.
    #[inline]
    pub fn contains(&self, state: Jugs) -> bool {
        state.fits(self.capacity)
    }

    /// Number of states in the puzzle, reachable or not, saturating at [`u64::MAX`].
    pub fn state_count(&self) -> u64 {
        (u64::from(self.capacity.a) + 1).saturating_mul(u64::from(self.capacity.b) + 1)
    }

    /// All six moves from `state` and where they lead, in [`Pour::VARIANTS`] order.
    /// Moves which don't change anything are included.
    pub fn successors(&self, state: Jugs) -> impl Iterator<Item = (Pour, Jugs)> + '_ {
        Pour::VARIANTS.iter()
            .map(move |pour| (*pour, pour.apply(state, self.capacity)))
    }
}
