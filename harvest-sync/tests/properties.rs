use harvest_sync::{Bool, Float64, Int64, REDACTION_MARKER, Secret, Text};
use proptest::prelude::*;

proptest! {
    #[test]
    fn int64_text_round_trips(v in any::<i64>()) {
        let field = Int64::default();
        field.set_string(&Int64::new(v).to_string()).unwrap();
        prop_assert_eq!(field.get(), v);
    }

    #[test]
    fn float64_text_round_trips(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let field = Float64::default();
        field.set_string(&Float64::new(v).to_string()).unwrap();
        prop_assert_eq!(field.get().to_bits(), v.to_bits());
    }

    #[test]
    fn bool_text_round_trips(v in any::<bool>()) {
        let field = Bool::new(!v);
        field.set_string(&Bool::new(v).to_string()).unwrap();
        prop_assert_eq!(field.get(), v);
    }

    #[test]
    fn text_round_trips(v in "\\PC*") {
        let field = Text::default();
        field.set_string(&Text::new(v.clone()).to_string()).unwrap();
        prop_assert_eq!(field.get(), v);
    }

    #[test]
    fn secret_is_always_redacted(v in "\\PC*") {
        let field = Secret::default();
        field.set(v.clone());
        prop_assert_eq!(field.to_string(), REDACTION_MARKER);
        prop_assert_eq!(field.get(), v);
    }

    #[test]
    fn subscriber_sees_exact_write_sequence(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let field = Int64::default();
        let rx = field.subscribe(values.len());
        for v in &values {
            field.set(*v);
        }
        let seen: Vec<i64> = rx.try_iter().collect();
        prop_assert_eq!(seen, values);
    }

    #[test]
    fn rejected_int_text_keeps_previous_value(prev in any::<i64>(), junk in "[a-z]{1,12}") {
        let field = Int64::new(prev);
        prop_assert!(field.set_string(&junk).is_err());
        prop_assert_eq!(field.get(), prev);
    }
}
