// Tests for variant selection
// Test cases:
// - FirstVariant picks the first-listed pronunciation
// - Empty variant list yields None

use super::*;

fn make_variants() -> Vec<Pronunciation> {
    vec![
        vec!["R".to_string(), "IY".to_string(), "D".to_string()],
        vec!["R".to_string(), "EH".to_string(), "D".to_string()],
    ]
}

#[test]
fn test_first_variant_is_canonical() {
    let variants = make_variants();
    let selected = FirstVariant.select(&variants).unwrap();
    assert_eq!(selected, &vec!["R".to_string(), "IY".to_string(), "D".to_string()]);
}

#[test]
fn test_empty_variant_list_yields_none() {
    assert!(FirstVariant.select(&[]).is_none());
}
