use differences::{Error, Operator};
use yaml_rust2::{Yaml, YamlLoader};

fn yaml(s: &str) -> Yaml {
    YamlLoader::load_from_str(s).unwrap().into_iter().next().unwrap()
}

#[test]
fn test_parse_selectors() {
    assert_eq!("-".parse::<Operator>().unwrap(), Operator::Complement);
    assert_eq!("⋂".parse::<Operator>().unwrap(), Operator::Intersection);
    assert_eq!("⋃".parse::<Operator>().unwrap(), Operator::Union);
}

#[test]
fn test_unknown_selector_is_a_configuration_error() {
    for selector in ["", "+", "∪", "union", " -"] {
        let err = selector.parse::<Operator>().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)), "{:?}", selector);
    }
}

#[test]
fn test_display_round_trips() {
    for op in [Operator::Complement, Operator::Intersection, Operator::Union] {
        assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
    }
}

#[test]
fn test_apply_dispatches() {
    let left = yaml("[left]");
    let right = yaml("[right, left]");

    assert_eq!(Operator::Complement.apply(&left, &right).unwrap(), yaml("[]"));
    assert_eq!(Operator::Intersection.apply(&left, &right).unwrap(), yaml("[left]"));
    assert_eq!(Operator::Union.apply(&left, &right).unwrap(), yaml("[left, right]"));
}
