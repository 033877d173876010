use fxhash::FxHashMap;
use image::Rgb;

/// An RGB triple. Equality is exact, closeness is the Euclidean distance in RGB space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const GREEN: Color = Color([0, 255, 0]);
    pub const RED: Color = Color([255, 0, 0]);
    pub const BLUE: Color = Color([0, 0, 255]);

    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color([r, g, b])
    }

    /// Squared Euclidean distance, which orders colors the same way as [distance](Self::distance)
    /// without leaving the integers.
    pub fn distance_squared(&self, other: &Color) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| {
                let d = a as i32 - b as i32;
                (d * d) as u32
            })
            .sum()
    }

    pub fn distance(&self, other: &Color) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// True if every channel is strictly above `threshold`.
    pub fn brighter_than(&self, threshold: u8) -> bool {
        self.0.iter().all(|&c| c > threshold)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Color(pixel.0)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.0)
    }
}

/// Meaning of a canonical palette color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Open,
    Wall,
    Start,
    End,
    Marker,
}

/// The canonical colors in declaration order. Ties in distance go to the earliest entry.
pub const PALETTE: [(Color, Label); 5] = [
    (Color::GREEN, Label::Start),
    (Color::RED, Label::End),
    (Color::BLUE, Label::Marker),
    (Color::WHITE, Label::Open),
    (Color::BLACK, Label::Wall),
];

pub const OPEN_COLOR: Color = Color::WHITE;
pub const WALL_COLOR: Color = Color::BLACK;
pub const START_COLOR: Color = Color::GREEN;
pub const END_COLOR: Color = Color::RED;
pub const SOLUTION_COLOR: Color = Color::RED;
pub const FRONTIER_COLOR: Color = Color::GREEN;
pub const MARKER_COLOR: Color = Color::BLUE;

/// Returns the label of a canonical color, or [None] for colors outside the palette.
pub fn label_of(color: Color) -> Option<Label> {
    PALETTE
        .iter()
        .find(|(c, _)| *c == color)
        .map(|(_, label)| *label)
}

/// Maps colors to their closest palette entry, remembering every color it has seen.
/// The cache lives as long as the classifier and is never invalidated.
#[derive(Clone, Debug, Default)]
pub struct ColorClassifier {
    cache: FxHashMap<Color, Color>,
}

impl ColorClassifier {
    pub fn new() -> ColorClassifier {
        ColorClassifier::default()
    }

    /// The palette color closest to `color`.
    pub fn classify(&mut self, color: Color) -> Color {
        *self
            .cache
            .entry(color)
            .or_insert_with(|| closest_palette_color(color))
    }

    pub fn classify_label(&mut self, color: Color) -> Label {
        let canonical = self.classify(color);
        // Every classified color is a palette entry
        label_of(canonical).unwrap_or(Label::Wall)
    }

    /// Number of distinct colors classified so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

fn closest_palette_color(color: Color) -> Color {
    let mut best = PALETTE[0].0;
    let mut best_distance = color.distance_squared(&best);
    for (candidate, _) in PALETTE.iter().skip(1) {
        let d = color.distance_squared(candidate);
        if d < best_distance {
            best = *candidate;
            best_distance = d;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_colors_classify_to_themselves() {
        let mut classifier = ColorClassifier::new();
        for (color, label) in PALETTE {
            assert_eq!(classifier.classify(color), color);
            assert_eq!(classifier.classify_label(color), label);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Color::new(12, 200, 37);
        let b = Color::new(250, 3, 99);
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.distance(&a), 0.0);
        assert_eq!(Color::BLACK.distance(&Color::new(3, 4, 0)), 5.0);
    }

    #[test]
    fn near_colors_snap() {
        let mut classifier = ColorClassifier::new();
        assert_eq!(classifier.classify(Color::new(250, 245, 251)), Color::WHITE);
        assert_eq!(classifier.classify(Color::new(20, 30, 10)), Color::BLACK);
        assert_eq!(classifier.classify(Color::new(10, 230, 40)), Color::GREEN);
        assert_eq!(classifier.classify(Color::new(200, 20, 20)), Color::RED);
        assert_eq!(classifier.classify(Color::new(30, 20, 210)), Color::BLUE);
    }

    /// (128, 128, 0) is equally far from red and green, green is declared first.
    #[test]
    fn ties_go_to_first_palette_entry() {
        let tied = Color::new(128, 128, 0);
        assert_eq!(
            tied.distance_squared(&Color::RED),
            tied.distance_squared(&Color::GREEN)
        );
        let mut classifier = ColorClassifier::new();
        assert_eq!(classifier.classify(tied), Color::GREEN);
    }

    #[test]
    fn results_are_cached() {
        let mut classifier = ColorClassifier::new();
        let grey = Color::new(100, 100, 100);
        let first = classifier.classify(grey);
        assert_eq!(classifier.cached(), 1);
        assert_eq!(classifier.classify(grey), first);
        assert_eq!(classifier.cached(), 1);
        classifier.classify(Color::WHITE);
        assert_eq!(classifier.cached(), 2);
    }

    #[test]
    fn brightness_threshold_is_strict() {
        assert!(Color::new(241, 241, 241).brighter_than(240));
        assert!(!Color::new(241, 240, 241).brighter_than(240));
    }
}
