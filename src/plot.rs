use iced::{Point, Rectangle, Size};

const MARGIN_LEFT: f32 = 72.0;
const MARGIN_RIGHT: f32 = 24.0;
const MARGIN_TOP: f32 = 44.0;
const MARGIN_BOTTOM: f32 = 52.0;

const AXIS_PADDING: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn padded(min: f64, max: f64) -> Self {
        let span = max - min;
        if span <= 0.0 || !span.is_finite() {
            let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
            return Axis { min: min - pad, max: min + pad };
        }
        Axis {
            min: min - span * AXIS_PADDING,
            max: max + span * AXIS_PADDING,
        }
    }

    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Axis::padded(min, max))
    }

    fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub area: Rectangle,
    pub x: Axis,
    pub y: Axis,
}

impl PlotLayout {
    pub fn new(size: Size, x: Axis, y: Axis) -> Self {
        let width = (size.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let height = (size.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        PlotLayout {
            area: Rectangle {
                x: MARGIN_LEFT,
                y: MARGIN_TOP,
                width,
                height,
            },
            x,
            y,
        }
    }

    pub fn fit(size: Size, points: &[(f64, f64)]) -> Self {
        let x = Axis::from_values(points.iter().map(|p| p.0)).unwrap_or(Axis { min: 0.0, max: 1.0 });
        let y = Axis::from_values(points.iter().map(|p| p.1)).unwrap_or(Axis { min: 0.0, max: 1.0 });
        Self::new(size, x, y)
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        let fx = self.x.fraction(x) as f32;
        let fy = self.y.fraction(y) as f32;
        Point::new(
            self.area.x + fx * self.area.width,
            self.area.y + (1.0 - fy) * self.area.height,
        )
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        nice_ticks(self.x.min, self.x.max, 8)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        nice_ticks(self.y.min, self.y.max, 6)
    }
}

fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

// Multiples of 1, 2 or 5 times a power of ten.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        return Vec::new();
    }
    let step = nice_step(span, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

pub fn format_tick(value: f64, ticks: &[f64]) -> String {
    let step = match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 1.0,
    };
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}

pub fn nearest_point(points: &[Point], cursor: Point, radius: f32) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(cursor)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

pub fn tooltip_lines(frequency_mhz: f64, wavelength_m: f64) -> [String; 2] {
    [
        format!("f={frequency_mhz:.2} MHz"),
        format!("λ={wavelength_m:.2} m"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn axis_padding() {
        let axis = Axis::padded(0.0, 100.0);
        assert_eq!(axis, Axis { min: -5.0, max: 105.0 });
        let flat = Axis::padded(10.0, 10.0);
        assert!(flat.min < 10.0 && flat.max > 10.0);
    }

    #[test]
    fn corners_map_to_area_edges() {
        let layout = PlotLayout::new(
            Size::new(800.0, 600.0),
            Axis { min: 0.0, max: 10.0 },
            Axis { min: 0.0, max: 100.0 },
        );
        let bottom_left = layout.to_screen(0.0, 0.0);
        assert!(close(bottom_left.x, layout.area.x));
        assert!(close(bottom_left.y, layout.area.y + layout.area.height));
        let top_right = layout.to_screen(10.0, 100.0);
        assert!(close(top_right.x, layout.area.x + layout.area.width));
        assert!(close(top_right.y, layout.area.y));
    }

    #[test]
    fn fit_encloses_points() {
        let points = [(3.0, 100.0), (30.0, 10.0)];
        let layout = PlotLayout::fit(Size::new(800.0, 600.0), &points);
        for (x, y) in points {
            let p = layout.to_screen(x, y);
            assert!(layout.area.contains(p), "{p:?} outside {:?}", layout.area);
        }
    }

    #[test]
    fn ticks_are_round() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(1.65, 31.35, 8), vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
        assert!(nice_ticks(5.0, 5.0, 5).is_empty());
    }

    #[test]
    fn tick_labels() {
        let coarse = [0.0, 200.0, 400.0];
        assert_eq!(format_tick(400.0, &coarse), "400");
        let fine = [0.0, 0.2, 0.4];
        assert_eq!(format_tick(0.4, &fine), "0.4");
    }

    #[test]
    fn picks_closest_point_in_radius() {
        let points = [Point::new(10.0, 10.0), Point::new(20.0, 10.0), Point::new(100.0, 100.0)];
        assert_eq!(nearest_point(&points, Point::new(17.0, 11.0), 6.0), Some(1));
        assert_eq!(nearest_point(&points, Point::new(12.0, 10.0), 6.0), Some(0));
        assert_eq!(nearest_point(&points, Point::new(60.0, 60.0), 6.0), None);
        assert_eq!(nearest_point(&[], Point::ORIGIN, 6.0), None);
    }

    #[test]
    fn tooltip_has_two_decimals() {
        assert_eq!(tooltip_lines(3.0, 100.0), ["f=3.00 MHz".to_string(), "λ=100.00 m".to_string()]);
        assert_eq!(tooltip_lines(145.678, 2.05935), ["f=145.68 MHz".to_string(), "λ=2.06 m".to_string()]);
    }
}
