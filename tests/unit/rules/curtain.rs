//! Tests for the curtain fold rule

#[cfg(test)]
mod tests {
    use nees::canvas::{Canvas, Surface};
    use nees::io::configuration::MAX_REJECTION_ATTEMPTS;
    use nees::io::parameters::RuleParameters;
    use nees::math::{Distribution, RandomSource, Sampler};
    use nees::rules::{CellRule, CurtainRule};
    use nees::spatial::{Cell, Point};

    const WIDTH: f64 = 60.0;
    const HEIGHT: f64 = 80.0;
    const PADDING: f64 = 0.1;

    fn draw(lines: usize, distribution: Distribution) -> Canvas {
        let cell = Cell::new(0, 0, WIDTH, HEIGHT);
        let mut sampler = Sampler::new(
            RandomSource::new(77, distribution).unwrap(),
            PADDING,
            MAX_REJECTION_ATTEMPTS,
        );
        let mut canvas = Canvas::new(WIDTH, HEIGHT);
        CurtainRule { lines }
            .draw(&cell, &mut sampler, &mut canvas)
            .unwrap();
        canvas
    }

    // Tests every line is horizontal and spans the padded width
    // Verified by letting lines reach the cell edge
    #[test]
    fn test_horizontal_lines() {
        let canvas = draw(32, Distribution::Uniform);
        assert_eq!(canvas.marks().len(), 64);
        for mark in canvas.marks() {
            let points: Vec<Point> = mark.points().collect();
            assert_eq!(points.len(), 2);
            assert!((points[0].y - points[1].y).abs() < f64::EPSILON);
            assert!((points[0].x - PADDING * WIDTH).abs() < 1e-9);
            assert!((points[1].x - (WIDTH - PADDING * WIDTH)).abs() < 1e-9);
        }
    }

    // Tests the two halves fill their own band of the padded cell
    // Verified by applying the cell offset twice
    #[test]
    fn test_halves_stay_in_bands() {
        for distribution in [
            Distribution::Uniform,
            Distribution::Exponential,
            Distribution::Normal,
        ] {
            let canvas = draw(50, distribution);
            let levels: Vec<f64> = canvas
                .marks()
                .iter()
                .filter_map(|m| m.points().next())
                .map(|p| p.y)
                .collect();
            let (first, second) = levels.split_at(50);
            for y in first {
                assert!((HEIGHT / 2.0 - 1e-9..=HEIGHT * (1.0 - PADDING) + 1e-9).contains(y));
            }
            for y in second {
                assert!((HEIGHT * PADDING - 1e-9..=HEIGHT / 2.0 + 1e-9).contains(y));
            }
        }
    }

    // Tests the translation scopes leave no state behind
    // Verified by skipping the restore
    #[test]
    fn test_state_balanced() {
        let canvas = draw(8, Distribution::Uniform);
        assert_eq!(canvas.saved_depth(), 0);
        assert_eq!(canvas.translation(), Point::default());
        assert_eq!(canvas.dimensions(), (WIDTH, HEIGHT));
    }

    // Tests zero lines draw nothing and p is read from the parameters
    // Verified by drawing one line per half regardless of p
    #[test]
    fn test_parameters() {
        assert!(draw(0, Distribution::Uniform).marks().is_empty());
        let rule = CurtainRule::from_parameters(&"p=5".parse().unwrap()).unwrap();
        assert_eq!(rule.lines, 5);
        assert_eq!(rule.marks_per_cell(), 10);
        assert_eq!(CurtainRule::from_parameters(&RuleParameters::new()).unwrap().lines, 64);
        assert!(CurtainRule::from_parameters(&"p=-1".parse().unwrap()).is_err());
    }
}
