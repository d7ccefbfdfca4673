use casepaths_proc::{Cases, Casepaths};
use rust_case_paths::{CasePath, Cases as _};

#[derive(Debug, Clone, PartialEq, Casepaths, Cases)]
enum Shape {
    Empty,
    Circle(f64),
    Rect { width: f64, height: f64 },
    Nested(Box<Inner>),
}

#[derive(Debug, Clone, PartialEq, Casepaths)]
enum Inner {
    Label(String),
    Count(u32),
}

#[test]
fn accessor_round_trips() {
    let circle = Shape::circle_case();
    assert_eq!(circle.embed(1.5), Shape::Circle(1.5));
    assert_eq!(circle.extract(&Shape::Circle(1.5)), Some(1.5));
    assert_eq!(circle.extract(&Shape::Empty), None);
}

#[test]
fn unit_accessor() {
    let empty = Shape::empty_case();
    assert_eq!(empty.embed(()), Shape::Empty);
    assert_eq!(empty.extract(&Shape::Empty), Some(()));
    assert_eq!(empty.extract(&Shape::Circle(0.0)), None);
}

#[test]
fn struct_variant_uses_tuple_payload() {
    let rect = Shape::rect_case();
    let shape = rect.embed((2.0, 3.0));
    assert_eq!(shape, Shape::Rect { width: 2.0, height: 3.0 });
    assert_eq!(rect.extract(&shape), Some((2.0, 3.0)));
}

#[test]
fn boxed_variant_unwraps_one_level() {
    let nested = Shape::nested_case();
    let shape = nested.embed(Inner::Count(4));
    assert_eq!(shape, Shape::Nested(Box::new(Inner::Count(4))));
    assert_eq!(nested.extract(&shape), Some(Inner::Count(4)));
    assert_eq!(nested.extract(&Shape::Empty), None);
}

#[test]
fn accessors_compose_across_enums() {
    let label = Shape::nested_case().then(Inner::label_case());
    let shape = Shape::Nested(Box::new(Inner::Label("tag".into())));
    assert_eq!(label.extract(&shape), Some("tag".to_string()));
    assert_eq!(
        label.extract(&Shape::Nested(Box::new(Inner::Count(1)))),
        None
    );
    assert_eq!(
        label.embed("new".into()),
        Shape::Nested(Box::new(Inner::Label("new".into())))
    );
    assert_eq!(format!("{:?}", label), "CasePath(Shape.Nested.Label)");
}

#[test]
fn collection_covers_every_variant() {
    let all = Shape::case_paths();
    assert_eq!(all.len(), 4);
    assert_eq!(all.len(), Shape::CASES);
    let names: Vec<_> = all.iter().map(|case| case.name()).collect();
    assert_eq!(names, vec!["Empty", "Circle", "Rect", "Nested"]);

    // exactly one accessor matches any given instance
    let shape = Shape::Circle(1.0);
    let matching: Vec<_> = all.iter().filter(|case| case.matches(&shape)).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].name(), "Circle");
}

#[test]
fn reverse_lookup_names_the_producing_case() {
    assert_eq!(Shape::Empty.case_path().name(), "Empty");
    assert_eq!(Shape::Circle(0.0).case_path().name(), "Circle");
    assert_eq!(
        Shape::Rect { width: 1.0, height: 2.0 }.case_path().name(),
        "Rect"
    );

    let shape = Shape::Circle(2.5);
    let case = shape.case_path();
    assert_eq!(case.extract_as::<f64>(&shape), Some(2.5));
}

#[test]
fn derived_cases_supports_runtime_paths() {
    assert_eq!(Shape::Empty.case_name(), "Empty");

    let circle: CasePath<Shape, f64> = CasePath::case(Shape::Circle);
    assert_eq!(circle.extract(&Shape::Circle(2.0)), Some(2.0));
    assert_eq!(circle.extract(&Shape::Empty), None);

    // boxed payload is visible one level down
    let nested: CasePath<Shape, Inner> =
        CasePath::case(|inner| Shape::Nested(Box::new(inner)));
    let shape = Shape::Nested(Box::new(Inner::Count(9)));
    assert_eq!(nested.extract(&shape), Some(Inner::Count(9)));
}

#[test]
fn derived_accessor_agrees_with_runtime_extractor() {
    let derived = Shape::circle_case();
    let runtime: CasePath<Shape, f64> = CasePath::case(Shape::Circle);
    for shape in [Shape::Circle(3.5), Shape::Empty, Shape::Nested(Box::new(Inner::Count(0)))] {
        assert_eq!(derived.extract(&shape), runtime.extract(&shape));
    }
}

#[test]
fn modify_and_set_through_derived_accessors() {
    let mut shape = Shape::Rect { width: 2.0, height: 3.0 };
    assert!(Shape::rect_case().modify(&mut shape, |(w, _h)| *w *= 2.0));
    assert_eq!(shape, Shape::Rect { width: 4.0, height: 3.0 });

    assert!(!Shape::circle_case().set(&mut shape, 1.0));
    assert!(Shape::rect_case().set(&mut shape, (0.0, 0.0)));
    assert_eq!(shape, Shape::Rect { width: 0.0, height: 0.0 });
}
