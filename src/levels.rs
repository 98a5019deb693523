//! Built-in level catalog
//!
//! Each level is a grid of single-character tile symbols plus a table of
//! bee triggers. Levels are immutable once parsed; everything dynamic is
//! derived from them by the simulation on `init_game`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TILE_SIZE;
use crate::sim::state::PickupKind;

/// Number of playable levels (ids are 1-based)
pub const LEVEL_COUNT: u8 = 5;

/// Errors at the level-catalog boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("unknown level {0} (expected 1..=5)")]
    UnknownLevel(u8),
}

/// One cell of a tilemap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    /// `1`: grass surface, solid below a thin non-solid lip
    GrassTop,
    /// `2`: packed dirt, solid over the whole cell
    Dirt,
    /// `3`: alternate full block
    GrassBlock,
    /// `T`
    Toast,
    /// `C`
    Cookie,
    /// `H`: grants a speed boost
    Chocolate,
    /// `W`: pond or goal water
    Water,
}

/// What a tile contributes to the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileClass {
    Empty,
    /// Solid with the grass lip removed from the top
    SolidTop,
    /// Solid over the full cell
    SolidFull,
    Pickup(PickupKind),
    Water,
}

impl Tile {
    /// Parse a map symbol. Unknown symbols are empty space.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '1' => Tile::GrassTop,
            '2' => Tile::Dirt,
            '3' => Tile::GrassBlock,
            'T' => Tile::Toast,
            'C' => Tile::Cookie,
            'H' => Tile::Chocolate,
            'W' => Tile::Water,
            _ => Tile::Empty,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '0',
            Tile::GrassTop => '1',
            Tile::Dirt => '2',
            Tile::GrassBlock => '3',
            Tile::Toast => 'T',
            Tile::Cookie => 'C',
            Tile::Chocolate => 'H',
            Tile::Water => 'W',
        }
    }

    /// Classification consulted by both geometry derivation and entity setup
    pub fn class(self) -> TileClass {
        match self {
            Tile::Empty => TileClass::Empty,
            Tile::GrassTop => TileClass::SolidTop,
            Tile::Dirt | Tile::GrassBlock => TileClass::SolidFull,
            Tile::Toast => TileClass::Pickup(PickupKind::Toast),
            Tile::Cookie => TileClass::Pickup(PickupKind::Cookie),
            Tile::Chocolate => TileClass::Pickup(PickupKind::Chocolate),
            Tile::Water => TileClass::Water,
        }
    }
}

/// A bee spawn trigger: fires once when the player passes `trigger_x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardTrigger {
    pub trigger_x: u32,
    pub spawn_y: u32,
}

const fn t(trigger_x: u32, spawn_y: u32) -> HazardTrigger {
    HazardTrigger { trigger_x, spawn_y }
}

/// A parsed tilemap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: u8,
    pub rows: Vec<Vec<Tile>>,
}

impl Level {
    /// Parse rows of tile symbols
    pub fn parse<S: AsRef<str>>(id: u8, rows: &[S]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.as_ref().chars().map(Tile::from_symbol).collect())
            .collect();
        Self { id, rows }
    }

    /// Tile at (row, col), empty outside the map
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// Iterate `(row, col, tile)` in row-major scan order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (row, col, tile))
        })
    }

    /// World width in pixels, measured on the first row
    pub fn width_px(&self) -> f32 {
        self.rows.first().map_or(0, Vec::len) as f32 * TILE_SIZE
    }

    pub fn height_px(&self) -> f32 {
        self.rows.len() as f32 * TILE_SIZE
    }
}

fn level_rows(id: u8) -> Result<&'static [&'static str], LevelError> {
    match id {
        1 => Ok(LEVEL_1),
        2 => Ok(LEVEL_2),
        3 => Ok(LEVEL_3),
        4 => Ok(LEVEL_4),
        5 => Ok(LEVEL_5),
        _ => Err(LevelError::UnknownLevel(id)),
    }
}

/// Load a built-in level by id (1..=5)
pub fn get_level(id: u8) -> Result<Level, LevelError> {
    level_rows(id).map(|rows| Level::parse(id, rows))
}

/// Bee triggers for a level, in table order
pub fn hazard_table(id: u8) -> Result<&'static [HazardTrigger], LevelError> {
    match id {
        1 => Ok(BEES_1),
        2 => Ok(BEES_2),
        3 => Ok(BEES_3),
        4 => Ok(BEES_4),
        5 => Ok(BEES_5),
        _ => Err(LevelError::UnknownLevel(id)),
    }
}

const LEVEL_1: &[&str] = &[
    "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000H00000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000C000011100000000000000000000000000000000000000000000000000000",
    "000000000000000000000000011110000000000000000000000000C0000000000000000000000T0000000000",
    "0000000000000000000T00T00000000000000000000000000T00000000000000000000000000000000000000",
    "00000000T000T00000111110000000000000000C00T00000111000000000C000T000T000T000000000000000",
    "111111100111111111222221111111111111111111111111222111111111111111111111111111111111WWWW",
    "2222222112222222222222222222222222222222222222222222222222222222222222222222222222222222",
    "2222222222222222222222222222222222222222222222222222222222222222222222222222222222222222",
];

const LEVEL_2: &[&str] = &[
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000H0000000000000000000000000000000000000000000H00000000000000000000",
    "0000000000000000000000C0001111000000000000000C00000000000000000000000000000000100000000000000000000",
    "000000000000T00000011100000000000000110000000000000000T000000000000000000000C0000000000000000000000",
    "0000000000000000000000000T000000000000000T0000000000000000000000000000000000110000000T0000000000000",
    "000T0000C000000111110000000000000000C00000000011100000C0000000T0000000000000000000000000000T0000000",
    "111111111111111222221111111111111111111111111122211111111111111111111000111111111111111111111111WWW",
    "222222222222222222222222222222222222222222222222222222222222222222222000222222222222222222222222222",
    "222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222",
];

const LEVEL_3: &[&str] = &[
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000C0000000H000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "00000000000000010000T000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "00000000000100000000T00000000000000000000000000000000000000000000000000C000000000000000000000000000000000000000000000",
    "000000000C0000000000T000000000000000000TTT000000000000000000000000000001000000000000000000000000000000000000000000000",
    "00000000110000000000T0000000000000000000000000000000000000000000000000T0000000000T000T0000000000000000000000000000000",
    "0000000000000000000000000000000000T00000000000001111000000000000000000100000000000000000000000000T00T00T00T00T00T0000",
    "111111111111111111111111111111111111111111111111222211000111111111111021111111111111111100111111111111111111111111WWW",
    "22222222222222222222222222222222222222222222222222222200T0T0C0T0T0C00T22222222222222222200222222222222222222222222222",
    "222222222222222222222222222222222222222222222222222222222222222222222222222222222222222200222222222222222222222222222",
];

const LEVEL_4: &[&str] = &[
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000C0000000000000H00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "00000000000000000000000000000C0C111000000000000C000000000000000000000000000000000000000000000000C00000000H0000000000000000000000000000000000000000",
    "00000000000000000000000000TT1111200000000000000T0000000000000000C000000000000000000000000000000000000000110000000000000000000000000000000000000000",
    "000000000000000000000CT011112000000000000000000T00000000000000000000000T0000000000T00000000000T0000000000000000C0000000000000000000000000000000000",
    "0000000000000000T000111120000000000000000000000T00000000000T0000000000000000T000000000T000000000000000000000000000000000000T000000000000T0000T0000",
    "H1111111111110111111222221111111111111111111111C11111111111111111111111111111111111111111111111111111111111111111111111001111110111110111111111WWW",
    "22222222222C00222222222222222222222222222222222C00C00T00T00C00T00H22222222222222222222222222222222222222222222222222222222222220222220222222222222",
    "22222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222222220222220222222222222",
];

const LEVEL_5: &[&str] = &[
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000H00000000000000000000000000000000000000000000000000000000000000HC000000000000000000000000000000000000000000000000H000000000000000",
    "00000000000000000000000000C0001000000000000000000000000000000000000000000000000000000TT0000001100000000000000000000000000000000000000000000C0001000000000000000",
    "0000000000000000000000C000100000000000000000C00000C000T000C0000000T0000H000000T0000001100000000000000T00000000000000C000000000000000000C00010000000000T00000000",
    "00000000000000000000001000000000000000000T000000000000000000000000000000000000000010000000000000000000000000C00000000000000000000000T01000000000000T0000000000",
    "00000000T000T00T00T000000000000000000T000000000000000000000000000000000000000000000000000000000000000000000000000000000000H00000000000000000000000000000000000",
    "101111111111111111111111111111111000011111111111111111111111111111111111111111111111111111111111111111111111111111111111111100001111111111111111111111111111WWW",
    "222222222222222222222222222222222000022222222222222222222222222222222222222222222222222222222222222222222222222222222222222200002222222222222222222222222222222",
    "222222222222222222222222222222222000022222222222222222222222222222222222222222222222222222222222222222222222222222222222222200002222222222222222222222222222222",
];

const BEES_1: &[HazardTrigger] = &[
    t(600, 300), t(1200, 350), t(1800, 300), t(2400, 320), t(3000, 280),
];

const BEES_2: &[HazardTrigger] = &[
    t(500, 250), t(800, 300), t(1200, 270), t(1500, 260), t(2000, 300), t(2500, 250),
    t(3000, 230), t(3999, 244), t(4500, 230),
];

const BEES_3: &[HazardTrigger] = &[
    t(800, 240), t(900, 230), t(900, 265), t(1200, 250), t(1600, 270), t(1700, 235),
    t(2000, 260), t(2200, 300), t(3000, 254), t(3555, 239), t(4000, 280),
];

const BEES_4: &[HazardTrigger] = &[
    t(300, 250), t(400, 210), t(500, 240), t(600, 230), t(700, 300), t(800, 240),
    t(1000, 230), t(1200, 244), t(1400, 225), t(1700, 221), t(2000, 234), t(2003, 239),
    t(2006, 280), t(2400, 200), t(2800, 230), t(3000, 260), t(3200, 244), t(3300, 230),
    t(3600, 250), t(3800, 254), t(4000, 239), t(4200, 280), t(4400, 300),
];

const BEES_5: &[HazardTrigger] = &[
    t(280, 220), t(300, 210), t(370, 220), t(375, 230), t(380, 190), t(370, 230),
    t(400, 170), t(430, 180), t(430, 220), t(500, 240), t(500, 230), t(500, 240),
    t(500, 170), t(560, 190), t(600, 180), t(680, 201), t(700, 206), t(800, 210),
    t(900, 190), t(1000, 160), t(1100, 200), t(1200, 204), t(1300, 207), t(1400, 190),
    t(1500, 210), t(1600, 220), t(1700, 205), t(1800, 200), t(1900, 210), t(2000, 230),
    t(2100, 290), t(2200, 220), t(2300, 260), t(2400, 230), t(2500, 250), t(2600, 250),
    t(2700, 230), t(2800, 240), t(2900, 250), t(3000, 220), t(3100, 224), t(3200, 240),
    t(3300, 201), t(3400, 190), t(3500, 210), t(3600, 212), t(3700, 170), t(3800, 220),
    t(3900, 222), t(4000, 240), t(4100, 202), t(4200, 200), t(4300, 220), t(4400, 214),
    t(4500, 181), t(4600, 220), t(4700, 225), t(4800, 240), t(4900, 203), t(5000, 210),
    t(5100, 170), t(5200, 215), t(5300, 193), t(5400, 220), t(5500, 227), t(5600, 240),
    t(5700, 204), t(5800, 190), t(5900, 223), t(6000, 216), t(6100, 185), t(6200, 220),
    t(6300, 229), t(6400, 240), t(6500, 190), t(6600, 204), t(6700, 215), t(6800, 218),
    t(6900, 200), t(7000, 220), t(7100, 222), t(7200, 240), t(7300, 205), t(7400, 206),
    t(7500, 219), t(7600, 219), t(7700, 190), t(7800, 220), t(7900, 221), t(8000, 240),
    t(8100, 206), t(8200, 190), t(8300, 215), t(8400, 221), t(8500, 210), t(8600, 220),
    t(8700, 223), t(8800, 240), t(8900, 207), t(9000, 230),
];
