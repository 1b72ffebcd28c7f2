use investability::error::InvestabilityError;
use investability::scoring::{classify, compute_score, Classification, Dimension, WeightTable};
use std::collections::BTreeMap;
use std::thread;

fn ratings(rating: i64) -> BTreeMap<String, i64> {
    Dimension::ALL
        .iter()
        .map(|dimension| (dimension.name().to_string(), rating))
        .collect()
}

#[test]
fn compute_score_accepts_recognised_dimension_names() {
    let mut input = ratings(5);
    input.insert("Market Growth Potential".to_string(), 10);
    input.insert("Profitability".to_string(), 10);
    input.insert("Competitive Advantage".to_string(), 10);

    let score = compute_score(&input, &WeightTable::standard()).expect("valid input");
    assert!((score - 7.666_666_666_666_667).abs() < 1e-12);
    assert_eq!(classify(score), Classification::High);
}

#[test]
fn compute_score_errors_are_invalid_input() {
    let mut input = ratings(5);
    input.insert("Regulatory Environment".to_string(), 0);

    let err = compute_score(&input, &WeightTable::standard()).expect_err("rating 0 should fail");
    assert!(matches!(err, InvestabilityError::InvalidInput(_)));

    let err = compute_score(&BTreeMap::new(), &WeightTable::standard())
        .expect_err("empty ratings should fail");
    assert!(matches!(err, InvestabilityError::InvalidInput(_)));
}

#[test]
fn compute_score_is_safe_across_threads() {
    let weights = WeightTable::standard();
    let handles = (1..=10)
        .map(|rating| {
            let weights = weights.clone();
            thread::spawn(move || compute_score(&ratings(rating), &weights))
        })
        .collect::<Vec<_>>();

    for (index, handle) in handles.into_iter().enumerate() {
        let score = handle
            .join()
            .expect("thread should not panic")
            .expect("valid input");
        assert_eq!(score, (index + 1) as f64);
    }
}

#[test]
fn classify_boundaries() {
    assert_eq!(classify(7.0), Classification::Moderate);
    assert_eq!(classify(5.0), Classification::Low);
}
