use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    error::MazeError,
    grid::{Grid, Tile},
};

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("RON error; {0}")]
    Ron(#[from] ron::Error),
    #[error("RON parse error; {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid grid; {0}")]
    Grid(#[from] MazeError),
}

/// On-disk form of a [`Grid`]: explicit size header followed by one `0`/`1` string per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableGrid {
    pub height: usize,
    pub width: usize,
    pub rows: Vec<String>,
}

impl From<&Grid> for SerializableGrid {
    fn from(grid: &Grid) -> Self {
        let rows = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|&tile| if tile.is_wall() { '1' } else { '0' })
                    .collect()
            })
            .collect();

        Self {
            height: grid.height(),
            width: grid.width(),
            rows,
        }
    }
}

impl TryFrom<SerializableGrid> for Grid {
    type Error = MazeError;

    fn try_from(ser: SerializableGrid) -> Result<Self, Self::Error> {
        if ser.rows.len() != ser.height {
            return Err(MazeError::Malformed(format!(
                "header says {} rows, found {}",
                ser.height,
                ser.rows.len()
            )));
        }

        let mut tiles = Vec::with_capacity(ser.height * ser.width);
        for (i, row) in ser.rows.iter().enumerate() {
            if row.len() != ser.width {
                return Err(MazeError::Malformed(format!(
                    "row {} has {} tiles, header says {}",
                    i,
                    row.len(),
                    ser.width
                )));
            }

            for ch in row.chars() {
                tiles.push(match ch {
                    '0' => Tile::Open,
                    '1' => Tile::Wall,
                    _ => return Err(MazeError::Malformed(format!("unexpected tile `{}`", ch))),
                });
            }
        }

        Grid::from_tiles(tiles, ser.height, ser.width)
    }
}

pub fn to_ron(grid: &Grid) -> Result<String, SerializeError> {
    Ok(ron::ser::to_string_pretty(
        &SerializableGrid::from(grid),
        PrettyConfig::default(),
    )?)
}

pub fn from_ron(s: &str) -> Result<Grid, SerializeError> {
    let ser: SerializableGrid = ron::from_str(s)?;
    Ok(Grid::try_from(ser)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate;

    #[test]
    fn grid_survives_ron() {
        let grid = generate(5, 8, Some(9)).unwrap();
        let text = to_ron(&grid).unwrap();
        assert!(text.contains("height: 11"));
        assert_eq!(from_ron(&text).unwrap(), grid);
    }

    #[test]
    fn header_must_match() {
        let text = r#"(height: 3, width: 3, rows: ["111", "101"])"#;
        assert!(matches!(
            from_ron(text),
            Err(SerializeError::Grid(MazeError::Malformed(_)))
        ));

        let text = r#"(height: 1, width: 3, rows: ["1101"])"#;
        assert!(matches!(from_ron(text), Err(SerializeError::Grid(_))));

        let text = r#"(height: 1, width: 3, rows: ["1x1"])"#;
        assert!(matches!(from_ron(text), Err(SerializeError::Grid(_))));
    }

    #[test]
    fn even_sides_are_rejected() {
        let text = r#"(height: 4, width: 5, rows: ["11111", "10001", "10111", "10111"])"#;
        assert!(matches!(
            from_ron(text),
            Err(SerializeError::Grid(MazeError::Malformed(_)))
        ));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(from_ron("not ron"), Err(SerializeError::Parse(_))));
    }
}
