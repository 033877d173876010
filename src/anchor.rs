use crate::color::{Color, ColorClassifier, END_COLOR, START_COLOR};
use crate::error::{Anchor, MazeError, Result};
use grid_util::point::Point;
use image::RgbImage;
use log::{info, warn};

/// Side length of the square drawn on an anchor.
pub const ANCHOR_MARKER_SIZE: i32 = 2;

/// Where an anchor position comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnchorSource {
    /// Used as given, no detection is attempted.
    Fixed(Point),
    /// Center of the region of the anchor color, failing if there is none.
    Detect,
    /// Like [AnchorSource::Detect] but falls back to the given point if detection fails.
    DetectOr(Point),
}

impl Anchor {
    /// Color the anchor is painted in and detected by.
    pub fn color(&self) -> Color {
        match self {
            Anchor::Start => START_COLOR,
            Anchor::End => END_COLOR,
        }
    }
}

/// Bounding box of the pixels whose closest palette color is `target`.
fn color_bounds(
    image: &RgbImage,
    target: Color,
    classifier: &mut ColorClassifier,
) -> Option<(Point, Point)> {
    let mut bounds: Option<(Point, Point)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if classifier.classify((*pixel).into()) != target {
            continue;
        }
        let (x, y) = (x as i32, y as i32);
        bounds = Some(match bounds {
            None => (Point::new(x, y), Point::new(x, y)),
            Some((min, max)) => (
                Point::new(min.x.min(x), min.y.min(y)),
                Point::new(max.x.max(x), max.y.max(y)),
            ),
        });
    }
    bounds
}

/// Center of the bounding box of all pixels classified as `target`, or [None] if no pixel is.
pub fn find_color_center(
    image: &RgbImage,
    target: Color,
    classifier: &mut ColorClassifier,
) -> Option<Point> {
    color_bounds(image, target, classifier)
        .map(|(min, max)| Point::new((min.x + max.x) / 2, (min.y + max.y) / 2))
}

/// Resolves the position of `anchor` according to `source`.
pub fn locate(
    image: &RgbImage,
    anchor: Anchor,
    source: AnchorSource,
    classifier: &mut ColorClassifier,
) -> Result<Point> {
    info!("Finding {} point...", anchor);
    let position = match source {
        AnchorSource::Fixed(point) => point,
        AnchorSource::Detect => find_color_center(image, anchor.color(), classifier)
            .ok_or(MazeError::AnchorNotFound { anchor })?,
        AnchorSource::DetectOr(fallback) => {
            match find_color_center(image, anchor.color(), classifier) {
                Some(point) => point,
                None => {
                    warn!(
                        "Failed to find {} point in maze, using {} instead",
                        anchor, fallback
                    );
                    fallback
                }
            }
        }
    };
    info!("{} point: {}", anchor, position);
    Ok(position)
}

/// Paints a solid square of side [ANCHOR_MARKER_SIZE] at `position`, clipped to the image.
pub fn mark_anchor(image: &mut RgbImage, position: Point, color: Color) {
    let d = ANCHOR_MARKER_SIZE / 2;
    for i in -d..(ANCHOR_MARKER_SIZE - d) {
        for j in -d..(ANCHOR_MARKER_SIZE - d) {
            let (x, y) = (position.x + i, position.y + j);
            if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
                image.put_pixel(x as u32, y as u32, color.into());
            }
        }
    }
}

/// Locates both anchors and marks them on the image.
pub fn locate_anchors(
    image: &mut RgbImage,
    start: AnchorSource,
    end: AnchorSource,
    classifier: &mut ColorClassifier,
) -> Result<(Point, Point)> {
    let start_point = locate(image, Anchor::Start, start, classifier)?;
    mark_anchor(image, start_point, Anchor::Start.color());
    let end_point = locate(image, Anchor::End, end, classifier)?;
    mark_anchor(image, end_point, Anchor::End.color());
    Ok((start_point, end_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{OPEN_COLOR, WALL_COLOR};

    fn blank(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, OPEN_COLOR.into())
    }

    #[test]
    fn detects_region_center() {
        let mut image = blank(10, 8);
        for x in 2..=5 {
            for y in 3..=6 {
                image.put_pixel(x, y, Color::new(10, 240, 20).into());
            }
        }
        let mut classifier = ColorClassifier::new();
        // Mean of 2 and 5 truncates to 3
        assert_eq!(
            find_color_center(&image, START_COLOR, &mut classifier),
            Some(Point::new(3, 4))
        );
    }

    #[test]
    fn missing_end_color_is_reported() {
        let mut image = blank(6, 6);
        image.put_pixel(1, 1, START_COLOR.into());
        image.put_pixel(2, 2, WALL_COLOR.into());
        let mut classifier = ColorClassifier::new();
        let result = locate(&image, Anchor::End, AnchorSource::Detect, &mut classifier);
        assert!(matches!(
            result,
            Err(MazeError::AnchorNotFound { anchor: Anchor::End })
        ));
        assert!(locate(&image, Anchor::Start, AnchorSource::Detect, &mut classifier).is_ok());
    }

    #[test]
    fn fallback_only_when_detection_fails() {
        let mut image = blank(6, 6);
        image.put_pixel(4, 5, END_COLOR.into());
        let mut classifier = ColorClassifier::new();
        let fallback = Point::new(0, 0);
        let end = locate(
            &image,
            Anchor::End,
            AnchorSource::DetectOr(fallback),
            &mut classifier,
        )
        .unwrap();
        assert_eq!(end, Point::new(4, 5));
        let start = locate(
            &image,
            Anchor::Start,
            AnchorSource::DetectOr(fallback),
            &mut classifier,
        )
        .unwrap();
        assert_eq!(start, fallback);
    }

    #[test]
    fn fixed_points_are_not_validated() {
        let image = blank(3, 3);
        let mut classifier = ColorClassifier::new();
        let far = Point::new(100, -4);
        assert_eq!(
            locate(&image, Anchor::Start, AnchorSource::Fixed(far), &mut classifier).unwrap(),
            far
        );
        assert_eq!(classifier.cached(), 0);
    }

    #[test]
    fn marker_is_clipped_square() {
        let mut image = blank(4, 4);
        mark_anchor(&mut image, Point::new(2, 2), START_COLOR);
        let marked = image
            .enumerate_pixels()
            .filter(|(_, _, p)| Color::from(**p) == START_COLOR)
            .map(|(x, y, _)| (x, y))
            .collect::<Vec<_>>();
        assert_eq!(marked, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);

        mark_anchor(&mut image, Point::new(0, 0), END_COLOR);
        assert_eq!(Color::from(*image.get_pixel(0, 0)), END_COLOR);
    }
}
