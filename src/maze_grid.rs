use crate::color::{Color, END_COLOR, OPEN_COLOR, START_COLOR, WALL_COLOR};
use crate::config::BRIGHTNESS_THRESHOLD;
use core::fmt;
use grid_util::point::Point;
use image::RgbImage;

/// The pixel grid a maze is solved on. Every pixel is a node, positions are
/// [Point]s with `x` running along the image width and `y` along its height.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub image: RgbImage,
    /// Pixels with every channel above this value count as open even if they are not exactly
    /// [OPEN_COLOR], which tolerates anti-aliasing.
    pub brightness_threshold: u8,
}

impl MazeGrid {
    pub fn new(image: RgbImage) -> MazeGrid {
        MazeGrid {
            image,
            brightness_threshold: BRIGHTNESS_THRESHOLD,
        }
    }
    pub fn width(&self) -> usize {
        self.image.width() as usize
    }
    pub fn height(&self) -> usize {
        self.image.height() as usize
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.in_bounds(point.x, point.y)
    }
    /// Color at `point`, which must be in bounds.
    pub fn get_point(&self, point: Point) -> Color {
        (*self.image.get_pixel(point.x as u32, point.y as u32)).into()
    }
    pub fn set_point(&mut self, point: Point, color: Color) {
        self.image.put_pixel(point.x as u32, point.y as u32, color.into());
    }
    /// Whether a search may step onto `point`. The end anchor is walkable so it can be reached.
    pub fn is_open(&self, point: Point) -> bool {
        let color = self.get_point(point);
        color == OPEN_COLOR || color.brighter_than(self.brightness_threshold) || color == END_COLOR
    }
    /// The 4-neighbourhood in search order: left, down, right, up. Points may be out of bounds.
    pub fn neighbourhood(point: Point) -> [Point; 4] {
        [
            Point::new(point.x - 1, point.y),
            Point::new(point.x, point.y - 1),
            Point::new(point.x + 1, point.y),
            Point::new(point.x, point.y + 1),
        ]
    }
    /// Neighbours of `point` that are in bounds and open.
    pub fn open_neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        Self::neighbourhood(point)
            .into_iter()
            .filter(move |p| self.point_in_bounds(*p) && self.is_open(*p))
    }
}

/// Builds an image from rows of text: `#` is a wall, `S` the start, `E` the end and anything
/// else open space. Handy for small test mazes.
pub fn ascii_image(rows: &[&str]) -> RgbImage {
    let height = rows.len() as u32;
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
    let mut image = RgbImage::from_pixel(width, height, OPEN_COLOR.into());
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let color = match c {
                '#' => WALL_COLOR,
                'S' => START_COLOR,
                'E' => END_COLOR,
                _ => OPEN_COLOR,
            };
            image.put_pixel(x as u32, y as u32, color.into());
        }
    }
    image
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| {
                    let color = self.get_point(Point::new(x, y));
                    if color == START_COLOR {
                        'S'
                    } else if color == END_COLOR {
                        'E'
                    } else if self.is_open(Point::new(x, y)) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
