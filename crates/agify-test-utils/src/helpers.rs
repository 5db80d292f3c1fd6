//! Small checks and calculations used by the step definitions.

use agify_client::Prediction;
use rand::seq::SliceRandom;
use std::time::Duration;

use crate::fixtures::{COMMON_NAMES, MAX_AGE, MIN_AGE};

/// A prediction with a known age and a non-negative count
pub fn validate_response_structure(prediction: &Prediction) -> bool {
    prediction.age.is_some_and(validate_age_range)
}

/// Whether an age falls inside a plausible human range
pub fn validate_age_range(age: u32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

pub fn validate_data_quality(count: u64, min_count: u64) -> bool {
    count >= min_count
}

pub fn validate_response_time(elapsed: Duration, max: Duration) -> bool {
    elapsed < max
}

/// Same name, age and count
pub fn compare_responses(first: &Prediction, second: &Prediction) -> bool {
    first.name == second.name && first.age == second.age && first.count == second.count
}

pub fn is_common_name(name: &str) -> bool {
    COMMON_NAMES.contains(&name.to_lowercase().as_str())
}

/// A throwaway name such as `demo456`
pub fn generate_random_name() -> String {
    let mut rng = rand::thread_rng();
    let prefix = ["test", "user", "demo", "sample"]
        .choose(&mut rng)
        .copied()
        .unwrap_or("test");
    let suffix = ["123", "456", "789", "abc", "xyz"]
        .choose(&mut rng)
        .copied()
        .unwrap_or("123");
    format!("{}{}", prefix, suffix)
}

pub fn format_test_result(name: &str, prediction: &Prediction, elapsed: Duration) -> String {
    let age = prediction
        .age
        .map(|age| age.to_string())
        .unwrap_or_else(|| "null".to_string());
    format!(
        "Name: {} | Age: {} | Count: {} | Time: {}ms",
        name,
        age,
        prediction.count,
        elapsed.as_millis()
    )
}

/// Aggregate figures over a set of predictions
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStats {
    pub total_requests: usize,
    /// Over predictions that carry an age
    pub average_age: Option<f64>,
    pub average_count: f64,
    pub average_response_time: Option<Duration>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub min_count: u64,
    pub max_count: u64,
}

/// `None` for an empty batch
pub fn calculate_batch_stats(
    predictions: &[Prediction],
    response_times: &[Duration],
) -> Option<BatchStats> {
    if predictions.is_empty() {
        return None;
    }

    let ages: Vec<u32> = predictions.iter().filter_map(|p| p.age).collect();
    let counts = predictions.iter().map(|p| p.count);
    let total_count: u64 = counts.clone().sum();

    let average_age = (!ages.is_empty())
        .then(|| ages.iter().map(|&age| f64::from(age)).sum::<f64>() / ages.len() as f64);
    let average_response_time = (!response_times.is_empty())
        .then(|| response_times.iter().sum::<Duration>() / response_times.len() as u32);

    Some(BatchStats {
        total_requests: predictions.len(),
        average_age,
        average_count: total_count as f64 / predictions.len() as f64,
        average_response_time,
        min_age: ages.iter().copied().min(),
        max_age: ages.iter().copied().max(),
        min_count: counts.clone().min().unwrap_or_default(),
        max_count: counts.max().unwrap_or_default(),
    })
}
