use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, VecDeque};
use std::fmt::{Display, Formatter};

use thiserror::Error;
use tracing::{debug, trace};

use crate::jugs::{JugPuzzle, Jugs, Pour};

/// Reasons a [`JugPuzzle`] search may fail.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum JugError {
    /// A start or goal state holds more than the jugs can.
    #[error("state {state} does not fit in jugs of capacity {capacity}")]
    StateOutOfBounds {
        /// The offending state.
        state: Jugs,
        /// Capacities of the puzzle.
        capacity: Jugs,
    },
    /// The search ran out of states without reaching the goal.
    #[error("goal {goal} cannot be reached")]
    GoalUnreachable {
        /// The goal that was asked for.
        goal: Jugs,
    },
    /// The search ran out of states without any of them satisfying the goal predicate.
    #[error("no reachable state satisfies the goal")]
    NoMatchingGoal,
}

/// What the search knows about a visited state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Visit {
    /// Number of moves from the start.
    pub distance: usize,
    /// The state this one was first reached from and the move that got here; `None` for the start.
    pub predecessor: Option<(Jugs, Pour)>,
}

/// Distances and predecessors of every state a breadth-first search has visited.
///
/// Only visited states are stored. Apart from the start, every reachable state has a jug that is empty or full,
/// so the record grows with the capacities rather than with their product.
#[derive(Clone, Debug)]
pub struct SearchRecord {
    start: Jugs,
    visits: BTreeMap<Jugs, Visit>,
}

impl SearchRecord {
    fn new(start: Jugs) -> Self {
        Self {
            start,
            visits: BTreeMap::from([(start, Visit { distance: 0, predecessor: None })]),
        }
    }

    /// The state the search began from.
    pub fn start(&self) -> Jugs {
        self.start
    }

    /// The recorded visit of `state`, or `None` if it was never reached (or is out of bounds entirely).
    pub fn visit(&self, state: Jugs) -> Option<Visit> {
        self.visits.get(&state).copied()
    }

    /// `true` if the search reached `state`.
    #[inline]
    pub fn is_reachable(&self, state: Jugs) -> bool {
        self.visit(state).is_some()
    }

    /// Minimum number of moves from the start to `state`.
    pub fn distance(&self, state: Jugs) -> Option<usize> {
        self.visit(state).map(|visit| visit.distance)
    }

    /// The state `state` was first reached from, and the move taken; `None` for the start and for unvisited states.
    pub fn predecessor(&self, state: Jugs) -> Option<(Jugs, Pour)> {
        self.visit(state).and_then(|visit| visit.predecessor)
    }

    /// Every visited state, in row-major order (by jug A, then jug B).
    pub fn reachable(&self) -> impl Iterator<Item = Jugs> + '_ {
        self.visits.keys().copied()
    }

    /// Record `state` as first reached from `from` by `pour`, unless it has already been visited.
    ///
    /// Returns `true` if `state` is new.
    fn discover(&mut self, state: Jugs, from: Jugs, pour: Pour) -> bool {
        let distance = match self.visit(from) {
            Some(visit) => visit.distance + 1,
            None => return false,
        };

        match self.visits.entry(state) {
            Entry::Vacant(slot) => {
                slot.insert(Visit { distance, predecessor: Some((from, pour)) });
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Walk predecessor links back from `goal` to the start.
    pub fn path_to(&self, goal: Jugs) -> Result<Solution, JugError> {
        let Some(visit) = self.visit(goal) else {
            return Err(JugError::GoalUnreachable { goal });
        };

        let mut states = Vec::with_capacity(visit.distance + 1);
        let mut moves = Vec::with_capacity(visit.distance);
        states.push(goal);

        let mut current = goal;
        while let Some((previous, pour)) = self.predecessor(current) {
            states.push(previous);
            moves.push(pour);
            current = previous;
        }

        states.reverse();
        moves.reverse();
        Ok(Solution { states, moves })
    }
}

/// A shortest sequence of states from some start to a goal, with the moves between them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    states: Vec<Jugs>,
    moves: Vec<Pour>,
}

impl Solution {
    /// States from start to goal inclusive.
    pub fn states(&self) -> &[Jugs] {
        &self.states
    }

    /// `moves()[i]` takes `states()[i]` to `states()[i + 1]`.
    pub fn moves(&self) -> &[Pour] {
        &self.moves
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// `true` if the start already was the goal.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// First state of the solution.
    pub fn start(&self) -> Jugs {
        self.states[0]
    }

    /// Last state of the solution.
    pub fn goal(&self) -> Jugs {
        self.states[self.states.len() - 1]
    }
}

/// One `<step> <state>` line per state, steps counted from 1.
impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (step, state) in self.states.iter().enumerate() {
            writeln!(f, "{} {}", step + 1, state)?;
        }

        Ok(())
    }
}

impl JugPuzzle {
    fn check_bounds(&self, state: Jugs) -> Result<(), JugError> {
        if self.contains(state) {
            Ok(())
        } else {
            Err(JugError::StateOutOfBounds { state, capacity: self.capacity() })
        }
    }

    /// Breadth-first search from `start`, stopping early once some state satisfies `stop`.
    /// Returns the record and the state that stopped the search, if any.
    fn search<F>(&self, start: Jugs, mut stop: F) -> (SearchRecord, Option<Jugs>)
    where
        F: FnMut(Jugs) -> bool,
    {
        let mut record = SearchRecord::new(start);
        if stop(start) {
            return (record, Some(start));
        }

        let mut frontier = VecDeque::from([start]);
        let mut explored = 0usize;

        while let Some(state) = frontier.pop_front() {
            explored += 1;
            for (pour, next) in self.successors(state) {
                if record.discover(next, state, pour) {
                    trace!(%state, %next, %pour, "discovered");
                    // first discovery in BFS order is already a shortest path
                    if stop(next) {
                        debug!(explored, found = %next, "search stopped early");
                        return (record, Some(next));
                    }
                    frontier.push_back(next);
                }
            }
        }

        debug!(explored, capacity = %self.capacity(), "state space exhausted");
        (record, None)
    }

    /// Visit every state reachable from `start`.
    pub fn explore(&self, start: Jugs) -> Result<SearchRecord, JugError> {
        self.check_bounds(start)?;
        Ok(self.search(start, |_| false).0)
    }

    /// Find a shortest sequence of moves from `start` to `goal`.
    pub fn solve(&self, start: Jugs, goal: Jugs) -> Result<Solution, JugError> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;

        let (record, _) = self.search(start, |state| state == goal);
        record.path_to(goal)
    }

    /// Find a shortest sequence of moves from `start` to any state satisfying `is_goal`.
    ///
    /// States are tested in the order the search discovers them, so among equally close goals the first discovered wins.
    pub fn solve_where<F>(&self, start: Jugs, is_goal: F) -> Result<Solution, JugError>
    where
        F: FnMut(Jugs) -> bool,
    {
        self.check_bounds(start)?;

        match self.search(start, is_goal) {
            (record, Some(goal)) => record.path_to(goal),
            (_, None) => Err(JugError::NoMatchingGoal),
        }
    }
}
