use crate::color::{ColorClassifier, Label, OPEN_COLOR, WALL_COLOR};
use crate::maze_grid::MazeGrid;
use grid_util::point::Point;
use image::RgbImage;
use log::info;

/// Purifies every pixel except the two anchors to either the open or the wall color.
/// Pixels resembling an anchor color anywhere else become open. Marker-like pixels are
/// treated as walls.
pub fn clean_image(
    mut image: RgbImage,
    start: Point,
    end: Point,
    classifier: &mut ColorClassifier,
) -> MazeGrid {
    info!("Cleaning image...");
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let point = Point::new(x as i32, y as i32);
        if point == start || point == end {
            continue;
        }
        let purified = match classifier.classify_label((*pixel).into()) {
            Label::Open | Label::Start | Label::End => OPEN_COLOR,
            Label::Wall | Label::Marker => WALL_COLOR,
        };
        *pixel = purified.into();
    }
    MazeGrid::new(image)
}
