#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use itertools::Itertools;
    use proptest::prelude::*;
    use strum::VariantArray;

    use crate::circuit::CircuitError;
    use crate::jugs::{JugPuzzle, Jugs, Pour};
    use crate::multigraph::Multigraph;
    use crate::search::JugError;

    const EXAMPLE_EDGES: &str = "ab ag bc be bg cd de ef eg fh hg";

    fn example_graph() -> Multigraph<char> {
        EXAMPLE_EDGES.parse().unwrap()
    }

    #[test]
    fn parse_example() {
        let graph = example_graph();

        assert_eq!(graph.edge_count(), 11);
        assert_eq!(graph.vertex_count(), 8);
        assert_eq!(graph.degree('a'), 2);
        assert_eq!(graph.degree('b'), 4);
        assert_eq!(graph.degree('e'), 4);
        assert_eq!(graph.degree('g'), 4);
        assert_eq!(graph.multiplicity('g', 'h'), 1);
        assert_eq!(graph.multiplicity('a', 'c'), 0);
    }

    #[test]
    fn parse_malformed() {
        assert_eq!("ab abc".parse::<Multigraph<char>>().unwrap_err(), CircuitError::MalformedEdge("abc".to_string()));
        assert_eq!("ab a".parse::<Multigraph<char>>().unwrap_err(), CircuitError::MalformedEdge("a".to_string()));
        assert!("".parse::<Multigraph<char>>().unwrap().is_empty());
    }

    #[test]
    fn circuit_on_example() {
        let original = example_graph();
        let mut graph = original.clone();

        let circuit = graph.euler_circuit('a').unwrap();

        assert_eq!(circuit.len(), 12);
        assert_eq!(circuit.first(), Some(&'a'));
        assert_eq!(circuit.last(), Some(&'a'));
        assert!(original.is_euler_circuit(&circuit, 'a'));

        // every edge was consumed, every vertex survives
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 8);
    }

    #[test]
    fn circuit_from_keeps_graph() {
        let graph = example_graph();

        let circuit = graph.circuit_from('e').unwrap();
        assert!(graph.is_euler_circuit(&circuit, 'e'));
        assert_eq!(graph.edge_count(), 11);
    }

    #[test]
    fn circuit_with_parallel_edges_and_loops() {
        let original: Multigraph<char> = "ab ab bc cb cc aa".parse().unwrap();
        assert_eq!(original.multiplicity('a', 'b'), 2);
        assert_eq!(original.degree('c'), 4);
        assert_eq!(original.degree('a'), 4);
        assert_eq!(original.edge_count(), 6);

        let circuit = original.circuit_from('a').unwrap();
        assert_eq!(circuit.len(), 7);
        assert!(original.is_euler_circuit(&circuit, 'a'));
    }

    #[test]
    fn circuit_on_isolated_vertex() {
        let mut graph = Multigraph::new();
        graph.add_vertex(7u32);

        assert_eq!(graph.euler_circuit(7).unwrap(), vec![7]);
    }

    #[test]
    fn odd_degree_is_rejected() {
        let mut graph: Multigraph<char> = "ab bc".parse().unwrap();

        assert_eq!(graph.euler_circuit('a').unwrap_err(), CircuitError::InvalidGraph { vertex: "'a'".to_string(), degree: 1 });
        // untouched on failure
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn disconnected_is_rejected() {
        let graph: Multigraph<char> = "ab ab cd dc".parse().unwrap();

        assert_eq!(graph.circuit_from('a').unwrap_err(), CircuitError::Disconnected { vertex: "'c'".to_string() });
    }

    #[test]
    fn isolated_vertices_do_not_disconnect() {
        let mut graph: Multigraph<char> = "ab bc ca".parse().unwrap();
        graph.add_vertex('z');

        let circuit = graph.circuit_from('a').unwrap();
        assert!(graph.is_euler_circuit(&circuit, 'a'));
    }

    #[test]
    fn unknown_start_is_rejected() {
        let graph = example_graph();

        assert_eq!(graph.circuit_from('z').unwrap_err(), CircuitError::UnknownVertex("'z'".to_string()));
    }

    #[test]
    fn unchecked_walk_on_path() {
        let mut graph: Multigraph<char> = "ab bc".parse().unwrap();

        // a path is not a circuit; the walk runs off the end and comes back as the stack unwinds
        let walk = graph.euler_circuit_unchecked('a');
        assert_eq!(walk, vec!['c', 'b', 'a']);
        assert!(graph.is_empty());

        assert_eq!(Multigraph::<char>::new().euler_circuit_unchecked('q'), vec!['q']);
    }

    #[test]
    fn verifier_needs_start_in_graph() {
        let mut graph = Multigraph::<char>::new();
        assert!(!graph.is_euler_circuit(&['a'], 'a'));

        graph.add_vertex('a');
        assert!(graph.is_euler_circuit(&['a'], 'a'));
    }

    #[test]
    fn verifier_rejects_bad_walks() {
        let graph: Multigraph<char> = "ab bc ca".parse().unwrap();

        assert!(graph.is_euler_circuit(&['a', 'b', 'c', 'a'], 'a'));
        assert!(graph.is_euler_circuit(&['a', 'c', 'b', 'a'], 'a'));
        // wrong start
        assert!(!graph.is_euler_circuit(&['b', 'c', 'a', 'b'], 'a'));
        // reuses an edge
        assert!(!graph.is_euler_circuit(&['a', 'b', 'a', 'a'], 'a'));
        // too short
        assert!(!graph.is_euler_circuit(&['a', 'b', 'a'], 'a'));
        // not closed
        assert!(!graph.is_euler_circuit(&['a', 'b', 'c', 'b'], 'a'));
    }

    fn closed_walk() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(0u8..6, 1..40).prop_map(|mut walk| {
            walk.push(walk[0]);
            walk
        })
    }

    proptest! {
        // any closed walk traces out an Eulerian multigraph
        #[test]
        fn circuits_of_closed_walks_are_valid(walk in closed_walk()) {
            let graph = Multigraph::from_edges(walk.iter().copied().tuple_windows());
            let start = walk[0];

            let circuit = graph.circuit_from(start).unwrap();
            prop_assert_eq!(circuit.len(), walk.len());
            prop_assert!(graph.is_euler_circuit(&circuit, start));
        }
    }

    #[test]
    fn pours_follow_saturating_formulas() {
        let capacity = Jugs::new(3, 5);

        assert_eq!(Pour::EmptyA.apply(Jugs::new(2, 4), capacity), Jugs::new(0, 4));
        assert_eq!(Pour::EmptyB.apply(Jugs::new(2, 4), capacity), Jugs::new(2, 0));
        assert_eq!(Pour::FillA.apply(Jugs::new(2, 4), capacity), Jugs::new(3, 4));
        assert_eq!(Pour::FillB.apply(Jugs::new(2, 4), capacity), Jugs::new(2, 5));
        assert_eq!(Pour::PourAIntoB.apply(Jugs::new(3, 2), capacity), Jugs::new(0, 5));
        assert_eq!(Pour::PourAIntoB.apply(Jugs::new(3, 4), capacity), Jugs::new(2, 5));
        assert_eq!(Pour::PourBIntoA.apply(Jugs::new(0, 5), capacity), Jugs::new(3, 2));
        assert_eq!(Pour::PourBIntoA.apply(Jugs::new(2, 1), capacity), Jugs::new(3, 0));
        assert_eq!(Pour::PourBIntoA.to_string(), "pour B into A");
    }

    #[test]
    fn pours_saturate_at_max() {
        let capacity = Jugs::new(u32::MAX, u32::MAX);

        assert_eq!(Pour::PourAIntoB.apply(Jugs::new(u32::MAX, 1), capacity), Jugs::new(1, u32::MAX));
        assert_eq!(Pour::PourBIntoA.apply(Jugs::new(1, u32::MAX), capacity), Jugs::new(u32::MAX, 1));
        assert_eq!(Pour::PourAIntoB.apply(Jugs::new(u32::MAX, u32::MAX), capacity), Jugs::new(u32::MAX, u32::MAX));
    }

    #[test]
    fn successors_stay_in_bounds() {
        let puzzle = JugPuzzle::new(3, 5);

        for (a, b) in (0..=3).cartesian_product(0..=5) {
            let successors = puzzle.successors(Jugs::new(a, b)).collect_vec();
            assert_eq!(successors.len(), Pour::VARIANTS.len());
            assert!(successors.iter().all(|(_, next)| puzzle.contains(*next)));
        }
    }

    #[test]
    fn solve_three_five() {
        let puzzle = JugPuzzle::new(3, 5);
        let solution = puzzle.solve(Jugs::new(0, 0), Jugs::new(0, 4)).unwrap();

        assert_eq!(solution.len(), 7);
        assert_eq!(solution.states().len(), 8);
        assert_eq!(solution.start(), Jugs::new(0, 0));
        assert_eq!(solution.goal(), Jugs::new(0, 4));

        for ((from, to), pour) in solution.states().iter().tuple_windows().zip(solution.moves()) {
            assert_eq!(pour.apply(*from, puzzle.capacity()), *to);
        }

        let printed = format!("{}", solution);
        assert_eq!(printed.lines().count(), 8);
        assert!(printed.starts_with("1 (0, 0)\n"));
        assert!(printed.ends_with("7 (3, 4)\n8 (0, 4)\n"));
    }

    #[test]
    fn solve_to_start() {
        let solution = JugPuzzle::new(3, 5).solve(Jugs::new(1, 1), Jugs::new(1, 1)).unwrap();

        assert!(solution.is_empty());
        assert_eq!(solution.states(), &[Jugs::new(1, 1)]);
        assert_eq!(format!("{}", solution), "1 (1, 1)\n");
    }

    #[test]
    fn unreachable_goal() {
        let puzzle = JugPuzzle::new(2, 2);

        assert_eq!(puzzle.solve(Jugs::new(0, 0), Jugs::new(1, 1)), Err(JugError::GoalUnreachable { goal: Jugs::new(1, 1) }));

        let record = puzzle.explore(Jugs::new(0, 0)).unwrap();
        assert!(!record.is_reachable(Jugs::new(1, 1)));
        assert_eq!(record.reachable().count(), 4);
        assert!(record.path_to(Jugs::new(1, 1)).is_err());
    }

    #[test]
    fn out_of_bounds_states() {
        let puzzle = JugPuzzle::new(3, 5);

        assert_eq!(
            puzzle.solve(Jugs::new(0, 0), Jugs::new(4, 0)),
            Err(JugError::StateOutOfBounds { state: Jugs::new(4, 0), capacity: Jugs::new(3, 5) })
        );
        assert!(puzzle.explore(Jugs::new(0, 6)).is_err());
    }

    #[test]
    fn measure_any_jug() {
        let puzzle = JugPuzzle::new(3, 5);

        let solution = puzzle.solve_where(Jugs::default(), |state| state.holds(4)).unwrap();
        assert!(solution.goal().holds(4));
        assert_eq!(solution.len(), 6);

        assert_eq!(puzzle.solve_where(Jugs::default(), |state| state.holds(9)), Err(JugError::NoMatchingGoal));
    }

    #[test]
    fn degenerate_capacities() {
        let puzzle = JugPuzzle::new(0, 0);
        assert_eq!(puzzle.state_count(), 1);
        assert_eq!(puzzle.explore(Jugs::default()).unwrap().reachable().collect_vec(), vec![Jugs::default()]);

        let puzzle = JugPuzzle::new(0, 4);
        assert_eq!(puzzle.solve(Jugs::default(), Jugs::new(0, 4)).unwrap().len(), 1);
        assert!(puzzle.solve(Jugs::default(), Jugs::new(0, 2)).is_err());
    }

    #[test]
    fn large_capacities() {
        let puzzle = JugPuzzle::new(20000, 30001);
        let solution = puzzle.solve(Jugs::default(), Jugs::new(0, 1)).unwrap();
        assert_eq!(solution.goal(), Jugs::new(0, 1));
        for ((from, to), pour) in solution.states().iter().tuple_windows().zip(solution.moves()) {
            assert_eq!(pour.apply(*from, puzzle.capacity()), *to);
        }

        let puzzle = JugPuzzle::new(u32::MAX, u32::MAX);
        assert_eq!(puzzle.state_count(), u64::MAX);
        assert_eq!(puzzle.solve(Jugs::default(), Jugs::new(0, u32::MAX)).unwrap().len(), 1);
        assert_eq!(
            puzzle.solve(Jugs::default(), Jugs::new(0, 1)),
            Err(JugError::GoalUnreachable { goal: Jugs::new(0, 1) })
        );
        assert_eq!(puzzle.explore(Jugs::default()).unwrap().reachable().count(), 4);
    }

    /// Distances from `start` over an adjacency list built by brute force.
    fn brute_force_distances(puzzle: &JugPuzzle, start: Jugs) -> HashMap<Jugs, usize> {
        let capacity = puzzle.capacity();
        let states = (0..=capacity.a).cartesian_product(0..=capacity.b)
            .map(Jugs::from)
            .collect_vec();
        let adjacent = |from: Jugs, to: Jugs| Pour::VARIANTS.iter().any(|pour| pour.apply(from, capacity) == to);

        let mut distances = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);
        while let Some(from) = queue.pop_front() {
            for to in states.iter().filter(|to| adjacent(from, **to)) {
                if !distances.contains_key(to) {
                    distances.insert(*to, distances[&from] + 1);
                    queue.push_back(*to);
                }
            }
        }

        distances
    }

    #[test]
    fn shortest_paths_match_brute_force() {
        for (capacity_a, capacity_b) in (0..=5).cartesian_product(0..=6) {
            let puzzle = JugPuzzle::new(capacity_a, capacity_b);
            let start = Jugs::default();
            let expected = brute_force_distances(&puzzle, start);
            let record = puzzle.explore(start).unwrap();

            for (a, b) in (0..=capacity_a).cartesian_product(0..=capacity_b) {
                let goal = Jugs::new(a, b);
                assert_eq!(record.distance(goal), expected.get(&goal).copied(), "{goal} in {capacity_a}x{capacity_b}");

                match puzzle.solve(start, goal) {
                    Ok(solution) => assert_eq!(Some(solution.len()), expected.get(&goal).copied()),
                    Err(e) => {
                        assert_eq!(e, JugError::GoalUnreachable { goal });
                        assert!(!expected.contains_key(&goal));
                    }
                }
            }
        }
    }
}
