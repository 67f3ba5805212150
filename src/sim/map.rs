//! Map decoding
//!
//! A map is a raster image where each pixel is one cell. Exact RGBA values
//! select the object spawned in that cell; anything else is empty floor.
//! Horizontal runs of wall pixels collapse into a single wall per run.

use std::path::Path;

use glam::IVec2;
use image::RgbaImage;

use super::objects::{Entity, MapObject, SiteName, Static};
use crate::error::MapError;

/// What a single pixel decodes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Wall,
    Forcefield,
    BombArea(SiteName),
    Box,
    Barrel,
    Player,
}

impl MapCell {
    /// Look up a pixel in the color table
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        match rgba {
            [0, 0, 0, 255] => MapCell::Wall,
            [0, 0, 255, 255] => MapCell::Forcefield,
            [255, 0, 0, 255] => MapCell::BombArea(SiteName::A),
            [0, 255, 0, 255] => MapCell::BombArea(SiteName::B),
            [255, 0, 255, 255] => MapCell::Box,
            [255, 255, 0, 255] => MapCell::Barrel,
            [100, 100, 255, 255] | [100, 100, 0, 255] => MapCell::Player,
            _ => MapCell::Empty,
        }
    }

    /// Canonical pixel for this cell (first table entry)
    pub fn to_rgba(self) -> [u8; 4] {
        match self {
            MapCell::Empty => [255, 255, 255, 255],
            MapCell::Wall => [0, 0, 0, 255],
            MapCell::Forcefield => [0, 0, 255, 255],
            MapCell::BombArea(SiteName::A) => [255, 0, 0, 255],
            MapCell::BombArea(SiteName::B) => [0, 255, 0, 255],
            MapCell::Box => [255, 0, 255, 255],
            MapCell::Barrel => [255, 255, 0, 255],
            MapCell::Player => [100, 100, 255, 255],
        }
    }

    /// Build the object for a non-wall, non-empty cell
    fn spawn(self, cell: IVec2) -> Option<MapObject> {
        match self {
            MapCell::Empty | MapCell::Wall => None,
            MapCell::Forcefield => Some(MapObject::Static(Static::forcefield(cell))),
            MapCell::BombArea(site) => Some(MapObject::Static(Static::bomb_area(cell, site))),
            MapCell::Box => Some(MapObject::Entity(Entity::boxed(cell))),
            MapCell::Barrel => Some(MapObject::Entity(Entity::barrel(cell))),
            MapCell::Player => Some(MapObject::Entity(Entity::player(cell))),
        }
    }
}

/// Decoder output: both collections in row-major scan order
#[derive(Debug, Clone, Default)]
pub struct MapData {
    /// Grid size in cells
    pub width: u32,
    pub height: u32,
    pub entities: Vec<Entity>,
    pub statics: Vec<Static>,
}

/// Merge each row's consecutive wall cells into one wall per run
fn merge_wall_runs(cells: &[MapCell], width: u32, height: u32) -> Vec<Static> {
    let mut walls = Vec::new();

    for row in 0..height {
        let mut run: Option<(Static, u32)> = None;
        let row_cells = &cells[(row * width) as usize..((row + 1) * width) as usize];

        for (col, cell) in row_cells.iter().enumerate() {
            if *cell == MapCell::Wall {
                match run.as_mut() {
                    Some((_, len)) => *len += 1,
                    None => {
                        run = Some((Static::wall(IVec2::new(col as i32, row as i32)), 1));
                    }
                }
            } else if let Some(done) = run.take() {
                walls.push(finish_run(done, row));
            }
        }

        if let Some(done) = run.take() {
            walls.push(finish_run(done, row));
        }
    }

    walls
}

fn finish_run((mut wall, len): (Static, u32), row: u32) -> Static {
    wall.extend_run(len);
    log::debug!("Wall run at row {} col {} spans {} cells", row, wall.cell.x, len);
    wall
}

/// Decode a tightly packed RGBA8 buffer of `width * height` pixels
pub fn decode_pixels(width: u32, height: u32, rgba: &[u8]) -> Result<MapData, MapError> {
    if width == 0 || height == 0 {
        return Err(MapError::Empty { width, height });
    }
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(MapError::BufferSize {
            expected,
            actual: rgba.len(),
        });
    }

    let cells: Vec<MapCell> = rgba
        .chunks_exact(4)
        .map(|p| MapCell::from_rgba([p[0], p[1], p[2], p[3]]))
        .collect();

    // Walls first, then every other object, each in scan order
    let walls = merge_wall_runs(&cells, width, height);
    let others = cells.iter().enumerate().filter_map(|(i, cell)| {
        let i = i as u32;
        cell.spawn(IVec2::new((i % width) as i32, (i / width) as i32))
    });

    let mut map = MapData {
        width,
        height,
        entities: Vec::new(),
        statics: walls,
    };
    for object in others {
        match object {
            MapObject::Static(s) => map.statics.push(s),
            MapObject::Entity(e) => map.entities.push(e),
        }
    }

    Ok(map)
}

/// Decode an already loaded image
pub fn decode_image(image: &RgbaImage) -> Result<MapData, MapError> {
    decode_pixels(image.width(), image.height(), image.as_raw())
}

/// Load and decode a map image from disk
pub fn load_map(path: impl AsRef<Path>) -> Result<MapData, MapError> {
    let path = path.as_ref();
    log::info!("Loading map ({})", path.display());

    let image = image::open(path)
        .map_err(|source| MapError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let map = decode_image(&image)?;
    log::info!(
        "Loaded {}x{} map: {} entities, {} statics",
        map.width,
        map.height,
        map.entities.len(),
        map.statics.len()
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BOX_SIZE;
    use crate::sim::collision::Rect;
    use crate::sim::objects::{EntityKind, StaticKind};
    use glam::Vec2;

    /// Build a map image from rows of cells
    fn image_from(rows: &[&[MapCell]]) -> RgbaImage {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba(rows[y as usize][x as usize].to_rgba())
        })
    }

    use super::MapCell::*;

    #[test]
    fn test_color_table() {
        assert_eq!(MapCell::from_rgba([0, 0, 0, 255]), Wall);
        assert_eq!(MapCell::from_rgba([0, 0, 255, 255]), Forcefield);
        assert_eq!(MapCell::from_rgba([255, 0, 0, 255]), BombArea(SiteName::A));
        assert_eq!(MapCell::from_rgba([0, 255, 0, 255]), BombArea(SiteName::B));
        assert_eq!(MapCell::from_rgba([255, 0, 255, 255]), Box);
        assert_eq!(MapCell::from_rgba([255, 255, 0, 255]), Barrel);
        assert_eq!(MapCell::from_rgba([100, 100, 255, 255]), Player);
        assert_eq!(MapCell::from_rgba([100, 100, 0, 255]), Player);
        // Alpha is part of the match
        assert_eq!(MapCell::from_rgba([0, 0, 0, 128]), Empty);
        assert_eq!(MapCell::from_rgba([9, 9, 9, 255]), Empty);
    }

    #[test]
    fn test_wall_run_merges_into_one() {
        let map = decode_image(&image_from(&[&[Wall, Wall, Wall, Player]])).unwrap();

        assert_eq!(map.statics.len(), 1);
        let wall = &map.statics[0];
        assert_eq!(wall.kind, StaticKind::Wall);
        assert_eq!(wall.width_in_cells(), 3);
        assert_eq!(
            wall.bounds,
            Rect::new(Vec2::ZERO, Vec2::new(3.0 * BOX_SIZE, BOX_SIZE))
        );

        assert_eq!(map.entities.len(), 1);
        assert!(matches!(map.entities[0].kind, EntityKind::Player { .. }));
        assert_eq!(map.entities[0].cell, IVec2::new(3, 0));
    }

    #[test]
    fn test_gap_splits_walls() {
        let map = decode_image(&image_from(&[&[Wall, Empty, Wall]])).unwrap();
        assert_eq!(map.statics.len(), 2);
        assert_eq!(map.statics[0].width_in_cells(), 1);
        assert_eq!(map.statics[1].width_in_cells(), 1);
        assert_eq!(map.statics[1].bounds.pos, Vec2::new(2.0 * BOX_SIZE, 0.0));
    }

    #[test]
    fn test_walls_do_not_merge_vertically() {
        let map = decode_image(&image_from(&[&[Wall, Wall], &[Wall, Wall]])).unwrap();
        assert_eq!(map.statics.len(), 2);
        assert_eq!(map.statics[0].cell, IVec2::new(0, 0));
        assert_eq!(map.statics[1].cell, IVec2::new(0, 1));
        assert!(map.statics.iter().all(|w| w.width_in_cells() == 2));
    }

    #[test]
    fn test_run_ending_at_row_end_is_kept() {
        let map = decode_image(&image_from(&[&[Empty, Wall, Wall], &[Wall, Empty, Empty]])).unwrap();
        assert_eq!(map.statics.len(), 2);
        assert_eq!(map.statics[0].cell, IVec2::new(1, 0));
        assert_eq!(map.statics[0].width_in_cells(), 2);
        assert_eq!(map.statics[1].cell, IVec2::new(0, 1));
    }

    #[test]
    fn test_unknown_color_is_empty() {
        let mut image = image_from(&[&[Empty, Box]]);
        image.put_pixel(0, 0, image::Rgba([9, 9, 9, 255]));
        let map = decode_image(&image).unwrap();
        assert!(map.statics.is_empty());
        assert_eq!(map.entities.len(), 1);
    }

    #[test]
    fn test_partition_keeps_scan_order() {
        let map = decode_image(&image_from(&[
            &[Barrel, Forcefield, Box],
            &[BombArea(SiteName::B), Player, Wall],
        ]))
        .unwrap();

        let entity_kinds: Vec<&str> = map.entities.iter().map(|e| e.kind.name()).collect();
        assert_eq!(entity_kinds, ["barrel", "box", "player"]);

        // Walls come first, then the remaining statics in scan order
        assert_eq!(map.statics[0].kind, StaticKind::Wall);
        assert_eq!(map.statics[1].kind, StaticKind::Forcefield { is_open: false });
        assert_eq!(
            map.statics[2].kind,
            StaticKind::BombArea {
                site: SiteName::B
            }
        );
    }

    #[test]
    fn test_positions_are_cell_multiples() {
        let map = decode_image(&image_from(&[&[Empty, Empty], &[Empty, Box]])).unwrap();
        assert_eq!(map.entities[0].pos, Vec2::new(BOX_SIZE, BOX_SIZE));
        assert_eq!((map.width, map.height), (2, 2));
    }

    #[test]
    fn test_bad_buffers_rejected() {
        assert!(matches!(
            decode_pixels(0, 3, &[]),
            Err(MapError::Empty { width: 0, height: 3 })
        ));
        assert!(matches!(
            decode_pixels(2, 1, &[0, 0, 0, 255]),
            Err(MapError::BufferSize {
                expected: 8,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_load_map_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        image_from(&[&[Wall, Wall], &[Barrel, Empty]])
            .save(&path)
            .unwrap();

        let map = load_map(&path).unwrap();
        assert_eq!(map.statics.len(), 1);
        assert_eq!(map.entities.len(), 1);
    }

    #[test]
    fn test_load_map_missing_file() {
        let err = load_map("does/not/exist.png").unwrap_err();
        assert!(matches!(err, MapError::Image { .. }));
    }
}
