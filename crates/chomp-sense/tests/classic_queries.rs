//! Integration test: sensor queries on the classic layout.

use chomp_core::{Direction, Distance, TileCoord, TileState};
use chomp_sense::{PathFinder, PowerPelletBearing};
use chomp_space::{EdgeBehavior, MazeGraph, NodeId, TileGrid};
use chomp_test_utils::{classic, parse_maze, RandomMaze};
use proptest::prelude::*;
use std::collections::VecDeque;

#[test]
fn classic_start_tile_queries() {
    let maze = classic().unwrap();
    let graph = maze.graph().unwrap();
    let finder = PathFinder::new(&graph, &maze.tiles, &maze.entities[..]).unwrap();
    let start = maze.pacman().unwrap().tile;

    assert_eq!(finder.distance_to_nearest_pellet(start).unwrap(), Distance::hops(1));
    assert_eq!(finder.distance_to_nearest_ghost(start).unwrap(), Distance::hops(20));
    assert_eq!(
        finder.nearest_power_pellet(start).unwrap(),
        PowerPelletBearing {
            distance: Distance::hops(18),
            direction: Some(Direction::Left),
        }
    );
}

#[test]
fn power_pellet_search_uses_the_tunnel() {
    let maze = classic().unwrap();
    let graph = maze.graph().unwrap();
    let finder = PathFinder::new(&graph, &maze.tiles, &maze.entities[..]).unwrap();
    let bearing = finder.nearest_power_pellet(TileCoord::new(14, 0)).unwrap();
    assert_eq!(bearing.distance, Distance::hops(20));
    assert_eq!(bearing.direction, Some(Direction::Right));
}

#[test]
fn ghost_in_sealed_house_is_unreachable() {
    let maze = parse_maze(
        "
#######
#P.. .#
###-###
# G   #
#######",
        EdgeBehavior::Absorb,
    )
    .unwrap();
    let graph = maze.graph().unwrap();
    let finder = PathFinder::new(&graph, &maze.tiles, &maze.entities[..]).unwrap();
    let start = maze.pacman().unwrap().tile;
    assert_eq!(finder.distance_to_nearest_ghost(start).unwrap(), Distance::UNREACHABLE);
    assert_eq!(finder.distance_to_nearest_pellet(start).unwrap(), Distance::hops(1));
}

#[test]
fn threat_probe_down_a_corridor_into_a_room() {
    let maze = parse_maze(
        "
###########
#P     #  #
###### #  #
#      G  #
###########",
        EdgeBehavior::Absorb,
    )
    .unwrap();
    let graph = maze.graph().unwrap();
    let finder = PathFinder::new(&graph, &maze.tiles, &maze.entities[..]).unwrap();
    let start = TileCoord::new(1, 1);
    // Along the corridor and down into the room where the ghost waits.
    assert!(finder.check_for_ghost(start, TileCoord::new(1, 2)).unwrap());
}

#[test]
fn approach_scores_on_random_mazes_are_normalised() {
    for seed in 0..8 {
        let maze = RandomMaze::default().generate(seed).unwrap();
        let graph = maze.graph().unwrap();
        let finder = PathFinder::new(&graph, &maze.tiles, &maze.entities[..]).unwrap();
        let start = maze.pacman().unwrap().tile;
        let scores = finder.pellet_approach_scores(start, 0.5).unwrap();
        let mut top = false;
        for d in Direction::ALL {
            if let Some(n) = scores.normalized(d) {
                assert!((0.0..=1.0).contains(&n), "seed {seed}: {n}");
                top |= n == 1.0;
            }
        }
        assert_eq!(top, scores.any_found(), "seed {seed}");
        assert_eq!(
            finder.normalized_pellet_approach_score(start, 0.5).unwrap(),
            scores.best()
        );
    }
}

#[test]
fn pellet_distance_is_zero_only_on_pellets() {
    let maze = RandomMaze::default().generate(11).unwrap();
    let graph = maze.graph().unwrap();
    let finder = PathFinder::new(&graph, &maze.tiles, &maze.entities[..]).unwrap();
    for node in graph.nodes() {
        let coord = graph.coord(node);
        let d = finder.distance_to_nearest_pellet(coord).unwrap();
        let on_pellet = maze.tiles.state(coord).unwrap().is_pellet();
        assert_eq!(d == Distance::ZERO, on_pellet, "{coord}");
    }
}

/// Hops from `from` to the nearest power pellet, never stepping on `avoid`.
fn power_pellet_hops(graph: &MazeGraph, tiles: &TileGrid, from: NodeId, avoid: Option<NodeId>) -> Option<u32> {
    let mut seen = vec![false; graph.node_count()];
    if let Some(avoid) = avoid {
        seen[avoid.index()] = true;
    }
    seen[from.index()] = true;
    let mut queue = VecDeque::from([(from, 0)]);
    while let Some((node, hops)) = queue.pop_front() {
        if tiles.state_at(graph.tile(node)) == TileState::PowerPellet {
            return Some(hops);
        }
        for edge in graph.edges(node) {
            if !std::mem::replace(&mut seen[edge.to.index()], true) {
                queue.push_back((edge.to, hops + 1));
            }
        }
    }
    None
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn power_pellet_bearing_starts_a_shortest_path(
        seed in any::<u64>(),
        rooms_wide in 2u32..8,
        rooms_high in 2u32..8,
        braid in 0.0f64..0.4,
        pick in any::<usize>(),
    ) {
        let maze = RandomMaze { rooms_wide, rooms_high, braid, ..RandomMaze::default() }
            .generate(seed)
            .unwrap();
        let graph = maze.graph().unwrap();
        let finder = PathFinder::new(&graph, &maze.tiles, &maze.entities[..]).unwrap();
        let start = NodeId((pick % graph.node_count()) as u32);
        let bearing = finder.nearest_power_pellet(graph.coord(start)).unwrap();

        match power_pellet_hops(&graph, &maze.tiles, start, None) {
            None => prop_assert_eq!(bearing, PowerPelletBearing::NONE),
            Some(0) => {
                prop_assert_eq!(bearing.distance, Distance::ZERO);
                prop_assert_eq!(bearing.direction, None);
            }
            Some(best) => {
                prop_assert_eq!(bearing.distance, Distance::hops(best));
                let direction = bearing.direction.unwrap();
                let next = graph.neighbour(start, direction).unwrap();
                let rest = power_pellet_hops(&graph, &maze.tiles, next, Some(start));
                prop_assert_eq!(rest.map(|h| h + 1), Some(best));
            }
        }
    }
}
