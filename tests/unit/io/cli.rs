//! Tests for argument parsing and the render job

#[cfg(test)]
mod tests {
    use clap::Parser;
    use nees::GenerationError;
    use nees::io::cli::{Cli, RenderJob};
    use nees::io::parameters::ParameterValue;
    use nees::math::Distribution;
    use nees::rules::{Rule, WalkMode};
    use nees::spatial::GridShape;

    // Tests defaults when only the output is given
    // Verified by changing the default grid
    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["nees", "out.svg"]).unwrap();
        assert_eq!(cli.rule, 0);
        assert_eq!(cli.width, 64);
        assert_eq!(cli.height, 64);
        assert_eq!(cli.seed, 2106);
        assert_eq!(cli.distribution, Distribution::Uniform);
        assert_eq!(cli.grid, GridShape::new(16, 16));
        assert!(cli.parameters.is_empty());
        assert!(cli.should_show_progress());
        assert!(matches!(cli.rule().unwrap(), Rule::Polygon(_)));
    }

    // Tests every option reaches its field
    // Verified by ignoring the -x option
    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "nees",
            "walk.svg",
            "-r",
            "2",
            "--width",
            "32",
            "--height",
            "48",
            "-d",
            "exponential",
            "-s",
            "7",
            "-p",
            "0.2",
            "-n",
            "(4,3)",
            "-x",
            "p=10,l=0.2,mode=rectangle",
            "--stroke-width",
            "0.5",
            "-q",
        ])
        .unwrap();

        assert_eq!(cli.distribution, Distribution::Exponential);
        assert_eq!(cli.grid, GridShape::new(4, 3));
        assert_eq!(cli.parameters.get("p"), Some(&ParameterValue::Int(10)));
        assert!(!cli.should_show_progress());

        let config = cli.configuration().unwrap();
        assert!((config.surface_width() - 128.0).abs() < f64::EPSILON);
        assert!((config.surface_height() - 144.0).abs() < f64::EPSILON);
        assert!((config.stroke_width - 0.5).abs() < f64::EPSILON);

        match cli.rule().unwrap() {
            Rule::Walk(walk) => {
                assert_eq!(walk.steps, 10);
                assert_eq!(walk.mode, WalkMode::Rectangle);
            }
            other => unreachable!("expected walk rule, got {other:?}"),
        }
    }

    // Tests malformed values are rejected at parse time
    // Verified by deferring grid parsing to the job
    #[test]
    fn test_parse_errors() {
        assert!(Cli::try_parse_from(["nees", "o.svg", "-d", "gaussian"]).is_err());
        assert!(Cli::try_parse_from(["nees", "o.svg", "-n", "16"]).is_err());
        assert!(Cli::try_parse_from(["nees", "o.svg", "-x", "p"]).is_err());
        assert!(Cli::try_parse_from(["nees"]).is_err());
    }

    // Tests an unknown rule fails before the output is created
    // Verified by creating the file before validation
    #[test]
    fn test_unknown_rule_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("never.svg");
        let cli = Cli::try_parse_from([
            "nees".into(),
            output.clone().into_os_string(),
            "-r".into(),
            "-1".into(),
        ])
        .unwrap();

        assert!(matches!(
            RenderJob::new(cli).run(),
            Err(GenerationError::UnimplementedRule { rule: -1 })
        ));
        assert!(!output.exists());
    }

    // Tests a quiet run writes the image
    // Verified by skipping finish on success
    #[test]
    fn test_run_writes_image() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("polygon.svg");
        let cli = Cli::try_parse_from([
            "nees".into(),
            output.clone().into_os_string(),
            "-n".into(),
            "(2,2)".into(),
            "-q".into(),
        ])
        .unwrap();

        RenderJob::new(cli).run().unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.matches("<path").count(), 5);
    }
}
