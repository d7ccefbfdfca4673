use casepaths_proc::{Cases, Casepaths};
use rust_case_paths::CasePath;

#[derive(Debug, Clone, PartialEq, Casepaths, Cases)]
enum Payment {
    Cash,
    Card(String),
    Split { cash: u32, card: u32 },
}

#[test]
fn derived_accessors_embed_and_extract() {
    let card = Payment::card_case();
    let root = card.embed("visa".to_string());
    assert_eq!(root, Payment::Card("visa".to_string()));
    assert_eq!(card.extract(&root), Some("visa".to_string()));
    assert_eq!(card.extract(&Payment::Cash), None);

    let cash = Payment::cash_case();
    assert_eq!(cash.extract(&Payment::Cash), Some(()));
    assert_eq!(cash.extract(&root), None);

    let split = Payment::split_case();
    let both = split.embed((10, 20));
    assert_eq!(both, Payment::Split { cash: 10, card: 20 });
    assert_eq!(split.extract(&both), Some((10, 20)));
}

#[test]
fn derived_collection_and_reverse_lookup() {
    let all = Payment::case_paths();
    assert_eq!(all.len(), 3);
    let names: Vec<_> = all.iter().map(|case| case.name()).collect();
    assert_eq!(names, vec!["Cash", "Card", "Split"]);

    let card = Payment::Card("visa".into());
    assert_eq!(card.case_path().name(), "Card");
    assert!(card.case_path().matches(&card));
}

#[test]
fn derived_cases_feeds_runtime_extractor() {
    use rust_case_paths::Cases as _;

    assert_eq!(Payment::CASES, 3);
    assert_eq!(Payment::Cash.case_name(), "Cash");

    let card: CasePath<Payment, String> = CasePath::case(Payment::Card);
    assert_eq!(
        card.extract(&Payment::Card("visa".into())),
        Some("visa".to_string())
    );
    assert_eq!(card.extract(&Payment::Cash), None);
    // multi-field variants have no single payload slot
    assert_eq!(Payment::Split { cash: 1, card: 2 }.payload().map(|_| ()), None);
}
