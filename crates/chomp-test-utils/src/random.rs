//! Seeded random maze generation.
//!
//! Mazes are carved with a depth-first backtracker over a lattice of rooms
//! two tiles apart, then braided by knocking out extra walls so the result
//! has loops like an arcade maze rather than a perfect tree.

use crate::fixtures::ParsedMaze;
use chomp_core::{Direction, Entity, TileCoord, TileState};
use chomp_space::{EdgeBehavior, SpaceError, TileGrid};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Parameters for a random maze.
#[derive(Clone, Debug)]
pub struct RandomMaze {
    /// Rooms across; the grid is `2 * rooms_wide + 1` tiles wide.
    pub rooms_wide: u32,
    /// Rooms down; the grid is `2 * rooms_high + 1` tiles tall.
    pub rooms_high: u32,
    /// Chance that each remaining interior wall between two rooms is removed.
    pub braid: f64,
    /// Pellets that become power pellets.
    pub power_pellets: usize,
    /// Ghosts to place.
    pub ghosts: usize,
}

impl Default for RandomMaze {
    fn default() -> Self {
        Self {
            rooms_wide: 13,
            rooms_high: 15,
            braid: 0.15,
            power_pellets: 4,
            ghosts: 4,
        }
    }
}

impl RandomMaze {
    pub fn rows(&self) -> u32 {
        2 * self.rooms_high + 1
    }

    pub fn cols(&self) -> u32 {
        2 * self.rooms_wide + 1
    }

    /// Generate a maze. The same seed always yields the same maze.
    ///
    /// Every floor tile holds a pellet except those under entities. The
    /// agent (id 0) and the ghosts (ids 1..) stand on distinct floor tiles.
    /// Fails with [`SpaceError::EmptyGrid`] when either room count is zero.
    pub fn generate(&self, seed: u64) -> Result<ParsedMaze, SpaceError> {
        if self.rooms_wide == 0 || self.rooms_high == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (rows, cols) = (self.rows() as usize, self.cols() as usize);
        let mut open = vec![vec![false; cols]; rows];

        let (w, h) = (self.rooms_wide as i32, self.rooms_high as i32);
        let room = |x: i32, y: i32| (2 * y as usize + 1, 2 * x as usize + 1);
        let mut visited = vec![false; (w * h) as usize];
        let mut stack = vec![(0i32, 0i32)];
        visited[0] = true;
        open[1][1] = true;

        while let Some(&(x, y)) = stack.last() {
            let unvisited: Vec<(i32, i32)> = Direction::ALL
                .iter()
                .map(|d| {
                    let (dr, dc) = d.offset();
                    (x + dc, y + dr)
                })
                .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < w && ny < h)
                .filter(|&(nx, ny)| !visited[(ny * w + nx) as usize])
                .collect();
            let Some(&(nx, ny)) = unvisited.choose(&mut rng) else {
                stack.pop();
                continue;
            };
            visited[(ny * w + nx) as usize] = true;
            let (r, c) = room(nx, ny);
            let (pr, pc) = room(x, y);
            open[r][c] = true;
            open[(r + pr) / 2][(c + pc) / 2] = true;
            stack.push((nx, ny));
        }

        // Braid: interior walls sitting between two rooms.
        for r in 1..rows - 1 {
            for c in 1..cols - 1 {
                let between_rows = r % 2 == 1 && c % 2 == 0;
                let between_cols = r % 2 == 0 && c % 2 == 1;
                if (between_rows || between_cols) && !open[r][c] && rng.gen_bool(self.braid) {
                    open[r][c] = true;
                }
            }
        }

        let mut floor = Vec::new();
        let mut states = vec![vec![TileState::Wall; cols]; rows];
        for (r, row) in open.iter().enumerate() {
            for (c, &o) in row.iter().enumerate() {
                if o {
                    states[r][c] = TileState::Pellet;
                    floor.push(TileCoord::new(r as i32, c as i32));
                }
            }
        }

        floor.shuffle(&mut rng);
        let mut spots = floor.into_iter();
        let mut entities = Vec::with_capacity(self.ghosts + 1);
        for id in 0..=self.ghosts {
            let Some(tile) = spots.next() else { break };
            states[tile.row as usize][tile.col as usize] = TileState::Empty;
            let facing = *Direction::ALL.choose(&mut rng).unwrap_or(&Direction::Left);
            entities.push(if id == 0 {
                Entity::pacman(0, tile, facing)
            } else {
                Entity::ghost(id as u32, tile)
            });
        }
        for tile in spots.take(self.power_pellets) {
            states[tile.row as usize][tile.col as usize] = TileState::PowerPellet;
        }

        let tiles = TileGrid::from_rows(states, EdgeBehavior::Absorb)?;
        Ok(ParsedMaze { tiles, entities })
    }
}
