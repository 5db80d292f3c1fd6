use agify_client::{ApiResponse, ApiResult, Prediction, StatusCode};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{ensure, error_status, fail, AssertionResult};
use crate::helpers::{is_common_name, validate_response_structure};

/// Every name in the group is echoed back unchanged; the empty name is
/// rejected with 422 instead.
pub fn assert_group_echoed(
    names: &[String],
    outcomes: &[ApiResult<ApiResponse>],
) -> AssertionResult {
    ensure(
        names.len() == outcomes.len(),
        format!(
            "Expected {} outcomes but got {}",
            names.len(),
            outcomes.len()
        ),
    )?;

    for (name, outcome) in names.iter().zip(outcomes) {
        match outcome {
            Ok(response) if !name.is_empty() => {
                let prediction = response.prediction()?;
                ensure(
                    &prediction.name == name,
                    format!(
                        "Expected name '{}' to be echoed back but got '{}'",
                        name, prediction.name
                    ),
                )?;
            }
            Ok(response) => {
                return Err(fail(format!(
                    "Expected the empty name to be rejected but got status {}",
                    response.status.as_u16()
                )))
            }
            Err(error) if name.is_empty() => ensure(
                error_status(error) == Some(StatusCode::UNPROCESSABLE_ENTITY.as_u16()),
                format!("Expected status 422 for the empty name but got: {}", error),
            )?,
            Err(error) => {
                return Err(fail(format!("Request for '{}' failed: {}", name, error)))
            }
        }
    }
    Ok(())
}

/// Every outcome is a complete prediction for a known common name
pub fn assert_common_predictions(outcomes: &[ApiResult<ApiResponse>]) -> AssertionResult {
    for outcome in outcomes {
        let prediction = match outcome {
            Ok(response) => response.prediction()?,
            Err(error) => {
                return Err(fail(format!(
                    "Expected every common name to succeed but got: {}",
                    error
                )))
            }
        };
        ensure(
            validate_response_structure(&prediction),
            format!("Incomplete prediction for '{}': {:?}", prediction.name, prediction),
        )?;
        ensure(
            is_common_name(&prediction.name),
            format!("'{}' is not a known common name", prediction.name),
        )?;
    }
    Ok(())
}

/// Spellings of a name that differ only in case predict the same age
pub fn assert_case_insensitive(predictions: &[Prediction]) -> AssertionResult {
    let mut seen: HashMap<String, &Prediction> = HashMap::new();
    for prediction in predictions {
        match seen.entry(prediction.name.to_lowercase()) {
            Entry::Occupied(first) => {
                let first = *first.get();
                ensure(
                    first.age == prediction.age,
                    format!(
                        "Expected '{}' and '{}' to share an age but got {:?} and {:?}",
                        first.name, prediction.name, first.age, prediction.age
                    ),
                )?;
            }
            Entry::Vacant(slot) => {
                slot.insert(prediction);
            }
        }
    }
    Ok(())
}

/// The i-th prediction carries the i-th requested country
pub fn assert_countries_in_order<S: AsRef<str>>(
    predictions: &[Prediction],
    countries: &[S],
) -> AssertionResult {
    ensure(
        predictions.len() == countries.len(),
        format!(
            "Expected {} predictions but got {}",
            countries.len(),
            predictions.len()
        ),
    )?;

    for (prediction, country) in predictions.iter().zip(countries) {
        let country = country.as_ref();
        ensure(
            prediction.country_id.as_deref() == Some(country),
            format!(
                "Expected country_id '{}' but got {:?}",
                country, prediction.country_id
            ),
        )?;
    }
    Ok(())
}
