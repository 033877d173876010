use crate::color::{Color, MARKER_COLOR, SOLUTION_COLOR};
use crate::config::CROSS_RADIUS;
use grid_util::point::Point;
use image::RgbImage;

fn put_clipped(image: &mut RgbImage, x: i32, y: i32, color: Color) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color.into());
    }
}

/// Paints every point of `path`.
pub fn paint_path(image: &mut RgbImage, path: &[Point], color: Color) {
    for p in path {
        put_clipped(image, p.x, p.y, color);
    }
}

/// Draws a cross with arms from `-radius` up to `radius - 1` around `center`.
pub fn draw_cross(image: &mut RgbImage, center: Point, radius: i32, color: Color) {
    for i in -radius..radius {
        put_clipped(image, center.x + i, center.y, color);
    }
    for j in -radius..radius {
        put_clipped(image, center.x, center.y + j, color);
    }
}

/// Paints solutions and failure markers.
#[derive(Copy, Clone, Debug)]
pub struct OutputRenderer {
    pub solution_color: Color,
    pub marker_color: Color,
    pub cross_radius: i32,
}

impl Default for OutputRenderer {
    fn default() -> OutputRenderer {
        OutputRenderer {
            solution_color: SOLUTION_COLOR,
            marker_color: MARKER_COLOR,
            cross_radius: CROSS_RADIUS,
        }
    }
}

impl OutputRenderer {
    pub fn render_solution(&self, image: &mut RgbImage, path: &[Point]) {
        paint_path(image, path, self.solution_color);
    }
    /// Marks both anchors with a cross.
    pub fn render_failure(&self, image: &mut RgbImage, start: Point, end: Point) {
        draw_cross(image, start, self.cross_radius, self.marker_color);
        draw_cross(image, end, self.cross_radius, self.marker_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::OPEN_COLOR;

    fn count(image: &RgbImage, color: Color) -> usize {
        image.pixels().filter(|p| Color::from(**p) == color).count()
    }

    #[test]
    fn cross_shape() {
        let mut image = RgbImage::from_pixel(9, 9, OPEN_COLOR.into());
        draw_cross(&mut image, Point::new(4, 4), 2, MARKER_COLOR);
        // Both arms cover offsets -2..=1 and share the center
        assert_eq!(count(&image, MARKER_COLOR), 7);
        assert_eq!(Color::from(*image.get_pixel(2, 4)), MARKER_COLOR);
        assert_eq!(Color::from(*image.get_pixel(4, 5)), MARKER_COLOR);
        assert_eq!(Color::from(*image.get_pixel(4, 6)), OPEN_COLOR);
    }

    #[test]
    fn cross_is_clipped() {
        let mut image = RgbImage::from_pixel(3, 3, OPEN_COLOR.into());
        OutputRenderer::default().render_failure(&mut image, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(count(&image, MARKER_COLOR), 5 + 5 - 2);
    }

    #[test]
    fn solution_painted() {
        let mut image = RgbImage::from_pixel(3, 1, OPEN_COLOR.into());
        let path = [Point::new(0, 0), Point::new(1, 0)];
        OutputRenderer::default().render_solution(&mut image, &path);
        assert_eq!(count(&image, SOLUTION_COLOR), 2);
    }
}
