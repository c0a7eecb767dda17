//! ASCII maze fixtures.
//!
//! | Glyph | Meaning                         |
//! |-------|---------------------------------|
//! | `#`   | wall                            |
//! | `-`   | ghost-house gate                |
//! | `.`   | pellet                          |
//! | `o`   | power pellet                    |
//! | ` `   | empty floor                     |
//! | `P`   | empty floor with the agent      |
//! | `G`   | empty floor with a ghost        |
//!
//! Entities get ids in row-major order starting at 0. Agents start facing
//! left.

use chomp_core::{Direction, Entity, EntityKind, TileCoord, TileState};
use chomp_space::{EdgeBehavior, MazeGraph, SpaceError, TileGrid};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("unknown maze glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
    #[error(transparent)]
    Space(#[from] SpaceError),
}

/// A parsed fixture: tiles plus the entities drawn on them.
#[derive(Clone, Debug)]
pub struct ParsedMaze {
    pub tiles: TileGrid,
    pub entities: Vec<Entity>,
}

impl ParsedMaze {
    /// The first agent drawn, if any.
    pub fn pacman(&self) -> Option<Entity> {
        self.entities
            .iter()
            .copied()
            .find(|e| e.kind == EntityKind::Pacman)
    }

    pub fn ghosts(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_ghost())
    }

    pub fn graph(&self) -> Result<MazeGraph, SpaceError> {
        MazeGraph::build(&self.tiles)
    }
}

/// Parse a maze drawn as text, one line per row.
///
/// A single leading newline is ignored so fixtures can start on the line
/// after the opening quote.
pub fn parse_maze(text: &str, edge: EdgeBehavior) -> Result<ParsedMaze, FixtureError> {
    let text = text.strip_prefix('\n').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    parse_rows(&lines, edge)
}

/// Parse a maze given as separate row strings.
pub fn parse_rows(lines: &[&str], edge: EdgeBehavior) -> Result<ParsedMaze, FixtureError> {
    let mut rows = Vec::with_capacity(lines.len());
    let mut entities = Vec::new();
    for (r, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (c, glyph) in line.chars().enumerate() {
            let tile = TileCoord::new(r as i32, c as i32);
            let id = entities.len() as u32;
            let state = match glyph {
                '#' => TileState::Wall,
                '-' => TileState::Gate,
                '.' => TileState::Pellet,
                'o' => TileState::PowerPellet,
                ' ' => TileState::Empty,
                'P' => {
                    entities.push(Entity::pacman(id, tile, Direction::Left));
                    TileState::Empty
                }
                'G' => {
                    entities.push(Entity::ghost(id, tile));
                    TileState::Empty
                }
                _ => return Err(FixtureError::UnknownGlyph { row: r, col: c, glyph }),
            };
            row.push(state);
        }
        rows.push(row);
    }
    let tiles = TileGrid::from_rows(rows, edge)?;
    Ok(ParsedMaze { tiles, entities })
}

/// The classic arcade layout: 28 columns, 31 rows, 240 pellets, 4 power
/// pellets, a wrapping side tunnel on row 14, one ghost above the ghost
/// house and the agent on its usual start tile.
pub const CLASSIC_ROWS: [&str; 31] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "######.##### ## #####.######",
    "######.##    G     ##.######",
    "######.## ###--### ##.######",
    "######.## #      # ##.######",
    "      .   #      #   .      ",
    "######.## #      # ##.######",
    "######.## ######## ##.######",
    "######.##          ##.######",
    "######.## ######## ##.######",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......P .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

/// Parse [`CLASSIC_ROWS`] with a wrapping edge.
pub fn classic() -> Result<ParsedMaze, FixtureError> {
    parse_rows(&CLASSIC_ROWS, EdgeBehavior::Wrap)
}
