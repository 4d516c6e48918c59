//! Turn-by-turn schedule simulation.
//!
//! Replays an [`AllocationPlan`] as discrete turns. Each turn first
//! advances every still-travelling train one station along its route, then
//! dispatches at most one new train per route while that route's dispatch
//! countdown lasts. Trains that reached their destination are omitted from
//! later turns.

use std::fmt;

use tracing::debug;

use crate::domain::StationName;
use crate::planner::AllocationPlan;

/// Identifier of a dispatched train. Numbering starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainId(pub usize);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// One train newly positioned on a station this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainMove {
    pub train: TrainId,
    pub station: StationName,
}

impl fmt::Display for TrainMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.train, self.station)
    }
}

/// All moves of one turn, in advance-then-dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    moves: Vec<TrainMove>,
}

impl Turn {
    /// The turn's moves.
    pub fn moves(&self) -> &[TrainMove] {
        &self.moves
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, train_move) in self.moves.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{train_move}")?;
        }
        Ok(())
    }
}

/// The full movement schedule, one [`Turn`] per line when displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    turns: Vec<Turn>,
}

impl Schedule {
    /// The turns in playing order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for turn in &self.turns {
            writeln!(f, "{turn}")?;
        }
        Ok(())
    }
}

/// A train still on the move.
struct ActiveTrain {
    id: TrainId,
    route: usize,
    position: usize,
}

/// Play the plan out over its full turn count.
pub fn simulate(plan: &AllocationPlan) -> Schedule {
    let routes = plan.routes();
    let mut countdown = plan.dispatches().to_vec();
    let mut active: Vec<ActiveTrain> = Vec::new();
    let mut next_id = 1;
    let mut turns = Vec::with_capacity(plan.total_turns());

    for _ in 0..plan.total_turns() {
        let mut moves = Vec::new();
        let mut still_moving = Vec::new();

        // Advance phase: every train recorded last turn that is not yet at
        // its route's final station takes one step.
        for mut train in active {
            let stations = routes[train.route].stations();
            if train.position + 1 >= stations.len() {
                continue;
            }
            train.position += 1;
            moves.push(TrainMove {
                train: train.id,
                station: stations[train.position].clone(),
            });
            still_moving.push(train);
        }

        // Dispatch phase: routes in index order, one new train each while
        // its countdown lasts. A dispatched train's first move lands it on
        // the route's second station.
        for (route_idx, route) in routes.iter().enumerate() {
            if countdown[route_idx] == 0 {
                continue;
            }
            countdown[route_idx] -= 1;
            let train = ActiveTrain {
                id: TrainId(next_id),
                route: route_idx,
                position: 1,
            };
            next_id += 1;
            moves.push(TrainMove {
                train: train.id,
                station: route.stations()[train.position].clone(),
            });
            still_moving.push(train);
        }

        active = still_moving;
        turns.push(Turn { moves });
    }

    debug!(
        turns = turns.len(),
        trains = next_id - 1,
        "schedule simulated"
    );
    Schedule { turns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, StationName};
    use crate::network::Network;
    use crate::planner::{self, PlannerConfig};

    fn name(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn network(stations: &[&str], links: &[(&str, &str)]) -> Network {
        let mut network = Network::new();
        for station in stations {
            network.add_station(name(station));
        }
        for (a, b) in links {
            network.add_link(name(a), name(b)).unwrap();
        }
        network
    }

    fn run(network: &Network, source: &str, destination: &str, trains: usize) -> Schedule {
        let plan = planner::plan(
            network,
            &name(source),
            &name(destination),
            trains,
            &PlannerConfig::default(),
        )
        .unwrap();
        simulate(&plan)
    }

    fn lines(schedule: &Schedule) -> Vec<String> {
        schedule.turns().iter().map(Turn::to_string).collect()
    }

    #[test]
    fn direct_link_single_train() {
        // Scenario A: one hop, one train, one line.
        let network = network(&["a", "b"], &[("a", "b")]);
        assert_eq!(lines(&run(&network, "a", "b", 1)), vec!["T1-b"]);
    }

    #[test]
    fn diamond_two_trains() {
        // Scenario B: two disjoint 2-hop routes, one train each, two turns.
        let network = network(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );
        assert_eq!(
            lines(&run(&network, "a", "d", 2)),
            vec!["T1-b T2-c", "T1-d T2-d"]
        );
    }

    #[test]
    fn five_trains_queue_on_one_route() {
        // Scenario E: a single 2-hop route, five trains. Each turn launches
        // one more train; the last arrives on turn 6.
        let network = network(&["a", "m", "b"], &[("a", "m"), ("m", "b")]);
        let schedule = run(&network, "a", "b", 5);
        assert_eq!(
            lines(&schedule),
            vec![
                "T1-m",
                "T1-b T2-m",
                "T2-b T3-m",
                "T3-b T4-m",
                "T4-b T5-m",
                "T5-b",
            ]
        );
    }

    #[test]
    fn finished_trains_are_omitted() {
        // A direct link and a detour: the direct train arrives on turn 1
        // and disappears from every later line.
        let network = network(
            &["a", "x", "y", "b"],
            &[("a", "b"), ("a", "x"), ("x", "y"), ("y", "b")],
        );
        let schedule = run(&network, "a", "b", 2);
        for turn in schedule.turns().iter().skip(1) {
            for train_move in turn.moves() {
                assert_ne!(train_move.train, TrainId(1));
            }
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(TrainId(7).to_string(), "T7");
        let turn = Turn {
            moves: vec![
                TrainMove {
                    train: TrainId(1),
                    station: name("left"),
                },
                TrainMove {
                    train: TrainId(2),
                    station: name("right"),
                },
            ],
        };
        assert_eq!(turn.to_string(), "T1-left T2-right");

        let schedule = Schedule {
            turns: vec![turn.clone(), turn],
        };
        assert_eq!(
            schedule.to_string(),
            "T1-left T2-right\nT1-left T2-right\n"
        );
    }

    #[test]
    fn pipeline_is_deterministic() {
        let build = || {
            network(
                &["a", "b", "c", "d", "e"],
                &[
                    ("a", "b"),
                    ("a", "c"),
                    ("b", "d"),
                    ("c", "d"),
                    ("b", "c"),
                    ("a", "e"),
                    ("e", "d"),
                ],
            )
        };
        let first = run(&build(), "a", "d", 4);
        let second = run(&build(), "a", "d", 4);
        assert_eq!(first, second);
    }

    #[test]
    fn every_turn_lists_at_most_one_train_per_interior_station() {
        let network = network(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("a", "e"), ("e", "d")],
        );
        let schedule = run(&network, "a", "d", 6);
        for turn in schedule.turns() {
            let mut interior_seen = std::collections::HashSet::new();
            for train_move in turn.moves() {
                if train_move.station != name("d") {
                    assert!(
                        interior_seen.insert(train_move.station.clone()),
                        "two trains on {} in one turn",
                        train_move.station
                    );
                }
            }
        }
    }

    #[test]
    fn simulate_runs_plan_turn_count() {
        let route = Route::new(vec![name("a"), name("m"), name("b")]).unwrap();
        let network = network(&["a", "m", "b"], &[("a", "m"), ("m", "b")]);
        let plan = planner::plan(
            &network,
            &name("a"),
            &name("b"),
            3,
            &PlannerConfig::default(),
        )
        .unwrap();
        assert_eq!(plan.routes(), &[route]);
        assert_eq!(simulate(&plan).len(), plan.total_turns());
    }
}
