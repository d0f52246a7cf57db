//! Tests for rule parameter parsing and typed lookups

#[cfg(test)]
mod tests {
    use nees::GenerationError;
    use nees::io::parameters::{ParameterValue, RuleParameters};

    // Tests values are typed integer first, then float, then text
    // Verified by parsing every number as float
    #[test]
    fn test_value_typing() {
        assert_eq!(ParameterValue::parse("8"), ParameterValue::Int(8));
        assert_eq!(ParameterValue::parse("-3"), ParameterValue::Int(-3));
        assert_eq!(ParameterValue::parse("0.25"), ParameterValue::Float(0.25));
        assert_eq!(
            ParameterValue::parse("rectangle"),
            ParameterValue::Text("rectangle".to_string())
        );
    }

    // Tests a full parameter string
    // Verified by not trimming whitespace around entries
    #[test]
    fn test_parse_list() {
        let parameters: RuleParameters = "p=128, l=0.05 ,mode=rectangle".parse().unwrap();
        assert_eq!(parameters.len(), 3);
        assert_eq!(parameters.get("p"), Some(&ParameterValue::Int(128)));
        assert_eq!(parameters.get("l"), Some(&ParameterValue::Float(0.05)));
        assert_eq!(parameters.text("mode", "line"), "rectangle");
    }

    // Tests the empty string yields no parameters
    // Verified by treating "" as a malformed entry
    #[test]
    fn test_parse_empty() {
        assert!("".parse::<RuleParameters>().unwrap().is_empty());
        assert!("   ".parse::<RuleParameters>().unwrap().is_empty());
    }

    // Tests entries without '=' or without a name are rejected
    // Verified by skipping malformed entries
    #[test]
    fn test_parse_malformed() {
        for input in ["p", "p=3,l", "=3"] {
            assert!(
                matches!(
                    input.parse::<RuleParameters>(),
                    Err(GenerationError::MalformedParameters { .. })
                ),
                "{input} should be malformed"
            );
        }
    }

    // Tests later entries replace earlier ones
    // Verified by keeping the first value
    #[test]
    fn test_duplicate_keys() {
        let parameters: RuleParameters = "p=3,p=5".parse().unwrap();
        assert_eq!(parameters.count("p", 0).unwrap(), 5);
    }

    // Tests count lookups with defaults and type errors
    // Verified by truncating floats to integers
    #[test]
    fn test_count_lookup() {
        let parameters = RuleParameters::new()
            .with("p", ParameterValue::Int(12))
            .with("q", ParameterValue::Float(1.5))
            .with("n", ParameterValue::Int(-1));

        assert_eq!(parameters.count("p", 8).unwrap(), 12);
        assert_eq!(parameters.count("missing", 8).unwrap(), 8);
        assert!(matches!(
            parameters.count("q", 8),
            Err(GenerationError::InvalidParameter { parameter: "q", .. })
        ));
        assert!(matches!(
            parameters.count("n", 8),
            Err(GenerationError::InvalidParameter { parameter: "n", .. })
        ));
    }

    // Tests numeric lookups widen integers and reject text
    // Verified by rejecting integer values
    #[test]
    fn test_number_lookup() {
        let parameters: RuleParameters = "a=45,w=0.5,l=short".parse().unwrap();
        assert!((parameters.number("a", 0.0).unwrap() - 45.0).abs() < f64::EPSILON);
        assert!((parameters.number("w", 0.0).unwrap() - 0.5).abs() < f64::EPSILON);
        assert!((parameters.number("r", 60.0).unwrap() - 60.0).abs() < f64::EPSILON);
        assert!(matches!(
            parameters.number("l", 0.1),
            Err(GenerationError::InvalidParameter { parameter: "l", .. })
        ));
    }
}
