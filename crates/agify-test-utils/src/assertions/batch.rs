use agify_client::Prediction;

use super::{ensure, AssertionResult};

/// Checks that the i-th prediction echoes the i-th requested name.
///
/// Matching is positional, never by lookup: the service is expected to
/// answer in request order.
pub fn assert_names_in_order(predictions: &[Prediction], expected: &[String]) -> AssertionResult {
    ensure(
        predictions.len() == expected.len(),
        format!(
            "Number of responses should match number of names: expected {} but got {}",
            expected.len(),
            predictions.len()
        ),
    )?;

    for (index, (prediction, name)) in predictions.iter().zip(expected).enumerate() {
        ensure(
            &prediction.name == name,
            format!(
                "Expected name '{}' at position {} but got '{}'",
                name, index, prediction.name
            ),
        )?;
    }
    Ok(())
}
