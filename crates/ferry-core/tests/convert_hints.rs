use ferry_core::convert::{MappingHints, SequentialGuidValueGenerator, ValueGenerator};
use pretty_assertions::assert_eq;

fn unicode(unicode: bool) -> MappingHints {
    MappingHints {
        unicode: Some(unicode),
        ..MappingHints::default()
    }
}

#[test]
fn with_keeps_own_fields() {
    let hints = MappingHints::sized(10).with(&MappingHints {
        size: Some(20),
        unicode: Some(true),
        ..MappingHints::default()
    });

    assert_eq!(
        hints,
        MappingHints {
            size: Some(10),
            unicode: Some(true),
            ..MappingHints::default()
        }
    );
}

#[test]
fn override_with_takes_other_fields() {
    let hints = MappingHints::sized(10)
        .with(&unicode(false))
        .override_with(&MappingHints {
            size: Some(20),
            precision: Some(5),
            ..MappingHints::default()
        });

    assert_eq!(hints.size, Some(20));
    assert_eq!(hints.precision, Some(5));
    assert_eq!(hints.unicode, Some(false));
    assert_eq!(hints.scale, None);
}

#[test]
fn empty_hints_are_neutral() {
    let hints = MappingHints::decimal(18, 2);

    assert!(MappingHints::default().is_empty());
    assert!(!hints.is_empty());
    assert_eq!(hints.with(&MappingHints::default()), hints);
    assert_eq!(MappingHints::default().with(&hints), hints);
    assert_eq!(hints.override_with(&MappingHints::default()), hints);
}

#[test]
fn generators_compare_by_identity() {
    let a = MappingHints::default()
        .with_value_generator(|| Box::new(SequentialGuidValueGenerator::new()));
    let b = MappingHints::default()
        .with_value_generator(|| Box::new(SequentialGuidValueGenerator::new()));

    assert!(!a.is_empty());
    assert_eq!(a.clone(), a);
    assert_ne!(a, b);
    assert!(MappingHints::sized(1).with(&a).value_generator.is_some());

    let generator = (a.value_generator.unwrap())();
    assert!(generator.next().is_ok());
}
