use crate::bodies::CollisionType;
use crate::core::Space;
use crate::error::PhysicsError;
use crate::math::{Rect, Vector2};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Per-tile-kind data shared by every tile of that kind
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TileData {
    /// Sprite frame drawn for this tile
    pub frame: u32,

    /// How bodies collide with the tile
    pub collision_type: CollisionType,

    /// Size of the collision box, anchored at the tile's top-left corner
    pub collision_box: Vector2,
}

/// A rectangular grid of tiles, used to build a space's static geometry
///
/// `tiles` is row-major; `0` is air and `n > 0` refers to `tileset[n - 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TileMap {
    /// Width and height of one grid cell
    pub tile_size: Vector2,

    /// Number of columns
    pub columns: usize,

    /// Number of rows
    pub rows: usize,

    /// Tile kinds referenced by the grid
    pub tileset: Vec<TileData>,

    /// Row-major tile indices
    pub tiles: Vec<u32>,
}

impl TileMap {
    /// Returns the tile data at a grid cell, `None` for air or out-of-range cells
    pub fn tile_at(&self, column: usize, row: usize) -> Option<&TileData> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        match self.tiles.get(row * self.columns + column).copied() {
            Some(0) | None => None,
            Some(index) => self.tileset.get(index as usize - 1),
        }
    }

    /// World-space collision rectangle for a tile placed at a grid cell
    pub fn collision_rect(&self, column: usize, row: usize, tile: &TileData) -> Rect {
        Rect::new(
            column as f32 * self.tile_size.x,
            row as f32 * self.tile_size.y,
            tile.collision_box.x,
            tile.collision_box.y,
        )
    }

    /// Checks the grid against its declared size and tileset
    pub fn validate(&self) -> Result<()> {
        if self.tiles.len() != self.columns * self.rows {
            return Err(PhysicsError::InvalidParameter(format!(
                "tile map has {} tiles, expected {}x{}",
                self.tiles.len(),
                self.columns,
                self.rows
            )));
        }

        if let Some(bad) = self.tiles.iter().find(|&&index| index as usize > self.tileset.len()) {
            return Err(PhysicsError::InvalidParameter(format!(
                "tile index {} is outside the tileset of {} entries",
                bad,
                self.tileset.len()
            )));
        }

        Ok(())
    }

    /// Registers one static body per solid tile, row by row
    ///
    /// Air tiles and tiles with [`CollisionType::None`] are skipped. Returns
    /// the number of static bodies added.
    pub fn populate_space(&self, space: &mut Space) -> Result<usize> {
        self.validate()?;

        let mut added = 0;
        for row in 0..self.rows {
            for column in 0..self.columns {
                let Some(tile) = self.tile_at(column, row) else {
                    continue;
                };
                if !tile.collision_type.is_solid() {
                    continue;
                }

                space.add_static(self.collision_rect(column, row, tile), tile.collision_type);
                added += 1;
            }
        }

        log::debug!("added {} static bodies from a {}x{} tile map", added, self.columns, self.rows);
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tileset() -> Vec<TileData> {
        vec![
            TileData { frame: 0, collision_type: CollisionType::Full, collision_box: Vector2::new(32.0, 32.0) },
            TileData { frame: 1, collision_type: CollisionType::OneWay, collision_box: Vector2::new(32.0, 8.0) },
            TileData { frame: 2, collision_type: CollisionType::None, collision_box: Vector2::new(32.0, 32.0) },
        ]
    }

    #[test]
    fn populates_solid_tiles_only() {
        let map = TileMap {
            tile_size: Vector2::new(32.0, 32.0),
            columns: 3,
            rows: 2,
            tileset: tileset(),
            tiles: vec![
                0, 2, 3,
                1, 1, 0,
            ],
        };

        let mut space = Space::new();
        assert_eq!(map.populate_space(&mut space).unwrap(), 3);

        let statics = space.static_bodies();
        assert_eq!(statics[0].rect, Rect::new(32.0, 0.0, 32.0, 8.0));
        assert_eq!(statics[0].collision_type, CollisionType::OneWay);
        assert_eq!(statics[1].rect, Rect::new(0.0, 32.0, 32.0, 32.0));
        assert_eq!(statics[2].rect, Rect::new(32.0, 32.0, 32.0, 32.0));
    }

    #[test]
    fn rejects_malformed_maps() {
        let mut map = TileMap {
            tile_size: Vector2::new(16.0, 16.0),
            columns: 2,
            rows: 2,
            tileset: tileset(),
            tiles: vec![0, 1, 1],
        };
        assert!(map.populate_space(&mut Space::new()).is_err());

        map.tiles = vec![0, 1, 1, 9];
        assert!(map.validate().is_err());
    }
}
