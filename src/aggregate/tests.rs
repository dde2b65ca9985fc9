use super::*;

fn rec(word: &str, score: f64) -> ScoreRecord {
    ScoreRecord::new(word, score)
}

fn pairs(mapping: &AggregatedMapping) -> Vec<(&str, f64)> {
    mapping.iter().collect()
}

#[test]
fn test_sort_by_score_desc_then_label_asc() {
    let mapping = aggregate(vec![vec![rec("b", 0.5), rec("a", 0.5), rec("c", 0.9)]]);

    assert_eq!(pairs(&mapping), vec![("c", 0.9), ("a", 0.5), ("b", 0.5)]);
}

#[test]
fn test_tie_break_is_case_sensitive_code_point_order() {
    let mapping = aggregate(vec![vec![
        rec("welding", 0.4),
        rec("Welding", 0.4),
        rec("Ägg", 0.4),
        rec("CNC", 0.4),
    ]]);

    assert_eq!(
        mapping.labels().collect::<Vec<_>>(),
        vec!["CNC", "Welding", "welding", "Ägg"]
    );
}

#[test]
fn test_duplicate_label_takes_later_sorted_value() {
    // 0.7 sorts before 0.2, so the 0.2 record is the later one and wins,
    // regardless of which arrived first.
    let arrival_low_first = aggregate(vec![vec![rec("x", 0.2)], vec![rec("x", 0.7)]]);
    let arrival_high_first = aggregate(vec![vec![rec("x", 0.7), rec("y", 0.5), rec("x", 0.2)]]);

    assert_eq!(arrival_low_first.get("x"), Some(0.2));
    assert_eq!(arrival_high_first.get("x"), Some(0.2));
    assert_eq!(arrival_low_first.len(), 1);
}

#[test]
fn test_duplicate_keeps_first_sorted_position() {
    let mapping = aggregate(vec![
        vec![rec("x", 0.9), rec("m", 0.5)],
        vec![rec("x", 0.1)],
    ]);

    assert_eq!(pairs(&mapping), vec![("x", 0.1), ("m", 0.5)]);
}

#[test]
fn test_identical_duplicates_collapse() {
    let mapping = aggregate(vec![
        vec![rec("CNC", 0.9), rec("CNC", 0.9)],
        vec![rec("welding", 0.3)],
    ]);

    assert_eq!(pairs(&mapping), vec![("CNC", 0.9), ("welding", 0.3)]);
}

#[test]
fn test_every_distinct_label_present_once() {
    let results = vec![
        vec![rec("a", 0.1), rec("b", 0.2), rec("a", 0.3)],
        vec![rec("c", 0.3), rec("b", 0.9)],
        vec![],
        vec![rec("d", 0.0)],
    ];

    let mapping = aggregate(results);
    let mut labels: Vec<&str> = mapping.labels().collect();
    labels.sort_unstable();

    assert_eq!(labels, vec!["a", "b", "c", "d"]);
    assert_eq!(mapping.len(), 4);
}

#[test]
fn test_result_independent_of_chunk_completion_order_only_depends_on_content() {
    let forward = aggregate(vec![vec![rec("a", 0.5)], vec![rec("b", 0.5)]]);
    let backward = aggregate(vec![vec![rec("b", 0.5)], vec![rec("a", 0.5)]]);

    assert_eq!(forward, backward);
}

#[test]
fn test_out_of_range_scores_kept() {
    let mapping = aggregate(vec![vec![rec("hi", 1.5), rec("lo", -0.5), rec("mid", 0.5)]]);

    assert_eq!(pairs(&mapping), vec![("hi", 1.5), ("mid", 0.5), ("lo", -0.5)]);
}

#[test]
fn test_nan_scores_do_not_panic() {
    let mapping = aggregate(vec![vec![rec("a", f64::NAN), rec("b", 0.5)]]);

    assert_eq!(mapping.len(), 2);
    assert!(mapping.get("a").is_some_and(f64::is_nan));
}

#[test]
fn test_sort_is_stable_for_equal_records() {
    let first = ScoreRecord::new("same", 0.5).with_id("1");
    let second = ScoreRecord::new("same", 0.5).with_id("2");

    let sorted = sorted_records(vec![vec![first.clone()], vec![second.clone()]]);

    assert_eq!(sorted, vec![first, second]);
}

#[test]
fn test_empty_input() {
    let mapping = aggregate(Vec::<ScoredChunkResult>::new());

    assert!(mapping.is_empty());
    assert_eq!(serde_json::to_string(&mapping).unwrap(), "{}");
}

#[test]
fn test_serializes_as_object_in_mapping_order() {
    let mapping = aggregate(vec![vec![rec("welding", 0.3), rec("CNC", 0.9)]]);

    assert_eq!(
        serde_json::to_string(&mapping).unwrap(),
        r#"{"CNC":0.9,"welding":0.3}"#
    );
}
