//! Tests for plane points and angle conversion

#[cfg(test)]
mod tests {
    use nees::spatial::Point;
    use nees::spatial::geometry::degrees_to_radians;

    // Tests polar construction along the axes
    // Verified by swapping sine and cosine
    #[test]
    fn test_polar_axes() {
        let east = Point::polar(2.0, 0.0);
        assert!(east.approx_eq(Point::new(2.0, 0.0), 1e-12));

        let south = Point::polar(2.0, 90.0);
        assert!(south.approx_eq(Point::new(0.0, 2.0), 1e-12));

        let west = Point::polar(2.0, 180.0);
        assert!(west.approx_eq(Point::new(-2.0, 0.0), 1e-12));
    }

    // Tests that opposite polar points are a diameter apart
    // Verified by dropping the 180 degree term
    #[test]
    fn test_polar_diameter() {
        let a = Point::polar(5.0, 37.0);
        let b = Point::polar(5.0, 217.0);
        assert!((a.distance(b) - 10.0).abs() < 1e-9);
    }

    // Tests degree conversion constants
    // Verified by inverting the conversion factor
    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((degrees_to_radians(60.0) - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
        assert!(degrees_to_radians(0.0).abs() < f64::EPSILON);
    }

    // Tests point arithmetic
    // Verified by negating the offset
    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p + Point::new(3.0, 4.0), Point::new(4.0, 6.0));
        assert_eq!(p - Point::new(1.0, 1.0), Point::new(0.0, 1.0));
        assert_eq!(p.offset(-1.0, 0.5), Point::new(0.0, 2.5));
        assert_eq!(Point::from((7.0, 8.0)), Point::new(7.0, 8.0));
    }
}
