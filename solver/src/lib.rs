//! Shared setup for the `euler` and `waterjug` binaries.

use std::fmt::Display;

use itertools::Itertools;

pub mod logging;

/// A circuit as printed by `euler`: one line, vertices separated by single spaces.
pub fn circuit_line<V: Display>(circuit: &[V]) -> String {
    circuit.iter().join(" ")
}
