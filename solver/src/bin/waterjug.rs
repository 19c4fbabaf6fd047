use anyhow::{Context, Result};
use clap::Parser;
use eulerjug::{Amount, JugPuzzle, Jugs};
use solver::logging;
use tracing::info;

/// Print a shortest sequence of jug states from a start to a goal.
///
/// Each move fills a jug from the tap, empties one onto the ground, or pours one into the other until it is empty or the other is full.
#[derive(Parser, Debug)]
#[command(name = "waterjug")]
struct Args {
    /// Capacities of jugs A and B
    #[arg(long, num_args = 2, value_names = ["A", "B"], default_values_t = [3, 5])]
    capacity: Vec<Amount>,

    /// Amounts in jugs A and B before the first move
    #[arg(long, num_args = 2, value_names = ["A", "B"], default_values_t = [0, 0])]
    start: Vec<Amount>,

    /// Amounts in jugs A and B to finish with
    #[arg(long, num_args = 2, value_names = ["A", "B"], default_values_t = [0, 4], conflicts_with = "measure")]
    goal: Vec<Amount>,

    /// Finish as soon as either jug holds this amount, instead of at an exact goal
    #[arg(long)]
    measure: Option<Amount>,
}

fn pair(values: &[Amount]) -> Jugs {
    Jugs::new(values[0], values[1])
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let capacity = pair(&args.capacity);
    let start = pair(&args.start);
    let puzzle = JugPuzzle::new(capacity.a, capacity.b);
    info!(%capacity, %start, states = puzzle.state_count(), "searching");

    let solution = match args.measure {
        Some(amount) => puzzle.solve_where(start, |state| state.holds(amount))
            .with_context(|| format!("cannot measure {amount} with jugs {capacity}"))?,
        None => {
            let goal = pair(&args.goal);
            puzzle.solve(start, goal)
                .with_context(|| format!("cannot get from {start} to {goal} with jugs {capacity}"))?
        }
    };

    print!("{}", solution);
    Ok(())
}
