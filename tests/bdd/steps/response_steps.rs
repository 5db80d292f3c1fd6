use agify_client::StatusCode;
use agify_test_utils::assertions::{is_error_outcome, observed_status};
use agify_test_utils::fixtures::{MAX_AGE, MAX_RESPONSE_TIME, MIN_AGE};
use agify_test_utils::helpers::{
    compare_responses, validate_age_range, validate_data_quality, validate_response_time,
};
use agify_test_utils::{ensure, fail, keys, AssertionResult};
use cucumber::then;
use serde_json::Value;
use std::time::Duration;

use crate::steps::world::AgifyWorld;

/// Type name of a JSON value as the feature files spell it; `null` is an `object`
fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Null | Value::Array(_) | Value::Object(_)) => "object",
    }
}

#[then("the API should return a successful response")]
fn successful_response(world: &mut AgifyWorld) -> AssertionResult {
    if let Ok(error) = world.state.error() {
        return Err(fail(format!(
            "Expected successful response but got error: {}",
            error
        )));
    }

    let status = world.state.response()?.status;
    ensure(
        status == StatusCode::OK,
        format!("Expected status 200 but got {}", status.as_u16()),
    )
}

#[then("the API should return an error response")]
fn error_response(world: &mut AgifyWorld) -> AssertionResult {
    ensure(
        is_error_outcome(&world.state),
        "Expected error response but got successful response",
    )
}

#[then(expr = "the API should return status code {int}")]
fn status_code(world: &mut AgifyWorld, expected: u16) -> AssertionResult {
    match observed_status(&world.state)? {
        Some(actual) => ensure(
            actual == expected,
            format!("Expected status {} but got {}", expected, actual),
        ),
        None => Err(fail(format!(
            "Expected status {} but the request failed without a status: {}",
            expected,
            world.state.error()?
        ))),
    }
}

#[then(expr = "the error message should contain {string}")]
fn error_message(world: &mut AgifyWorld, expected: String) -> AssertionResult {
    let error = world.state.error()?;
    let message = error
        .service_message()
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string());
    ensure(
        message.contains(&expected),
        format!("Expected error message to contain '{}' but got '{}'", expected, message),
    )
}

#[then(expr = "the response should contain the name {string}")]
fn response_name(world: &mut AgifyWorld, expected: String) -> AssertionResult {
    let prediction = world.state.prediction()?;
    ensure(
        prediction.name == expected,
        format!("Expected name '{}' but got '{}'", expected, prediction.name),
    )
}

#[then("the response should echo the requested name")]
fn response_echoes_name(world: &mut AgifyWorld) -> AssertionResult {
    let requested = world.state.text(keys::REQUESTED_NAME)?.to_string();
    response_name(world, requested)
}

#[then("the response should contain a numeric age")]
fn numeric_age(world: &mut AgifyWorld) -> AssertionResult {
    let age = world.state.response_data()?.get("age").cloned();
    ensure(
        json_type_name(age.as_ref()) == "number",
        format!(
            "Expected age to be a number but got {}",
            json_type_name(age.as_ref())
        ),
    )?;

    let age = world.state.prediction()?.age.unwrap_or_default();
    ensure(age > 0, format!("Expected age to be positive but got {}", age))
}

#[then("the predicted age should be within a plausible range")]
fn plausible_age(world: &mut AgifyWorld) -> AssertionResult {
    let prediction = world.state.prediction()?;
    match prediction.age {
        Some(age) => ensure(
            validate_age_range(age),
            format!(
                "Expected age between {} and {} but got {}",
                MIN_AGE, MAX_AGE, age
            ),
        ),
        None => Err(fail("Expected an age but the response had none")),
    }
}

#[then("the response should contain a count value greater than 0")]
fn positive_count(world: &mut AgifyWorld) -> AssertionResult {
    let count = world.state.prediction()?.count;
    ensure(
        count > 0,
        format!("Expected count to be greater than 0 but got {}", count),
    )
}

#[then(expr = "the response count should be at least {int}")]
fn minimum_count(world: &mut AgifyWorld, minimum: u64) -> AssertionResult {
    let count = world.state.prediction()?.count;
    ensure(
        validate_data_quality(count, minimum),
        format!("Expected count of at least {} but got {}", minimum, count),
    )
}

#[then("the response count might be 0 for uncommon names")]
fn non_negative_count(world: &mut AgifyWorld) -> AssertionResult {
    let count = world.state.response_data()?.get("count");
    ensure(
        count.and_then(Value::as_u64).is_some(),
        format!(
            "Expected count to be a non-negative number but got {}",
            count.map(ToString::to_string).unwrap_or_else(|| "nothing".into())
        ),
    )
}

#[then("the response age might be null for uncommon names")]
fn nullable_age(world: &mut AgifyWorld) -> AssertionResult {
    let age = world.state.response_data()?.get("age");
    ensure(
        matches!(age, Some(Value::Null) | Some(Value::Number(_))),
        format!("Expected age to be a number or null but got {:?}", age),
    )
}

#[then("the response should have the correct JSON structure")]
fn json_structure(world: &mut AgifyWorld) -> AssertionResult {
    let data = world.state.response_data()?;
    for field in ["name", "age", "count"] {
        ensure(
            data.get(field).is_some(),
            format!("Response should contain {} field", field),
        )?;
    }
    Ok(())
}

#[then(expr = "the response field {string} should be a {string}")]
fn field_type(world: &mut AgifyWorld, field: String, expected: String) -> AssertionResult {
    let actual = json_type_name(world.state.response_data()?.get(&field));
    ensure(
        actual == expected,
        format!("Expected {} to be {} but got {}", field, expected, actual),
    )
}

#[then(expr = "the response should contain the country {string}")]
fn response_country(world: &mut AgifyWorld, expected: String) -> AssertionResult {
    let prediction = world.state.prediction()?;
    ensure(
        prediction.country_id.as_deref() == Some(expected.as_str()),
        format!(
            "Expected country_id '{}' but got {:?}",
            expected, prediction.country_id
        ),
    )
}

#[then("the response should indicate missing or invalid name parameter")]
fn invalid_name(world: &mut AgifyWorld) -> AssertionResult {
    ensure(
        is_error_outcome(&world.state),
        "Expected error for missing/invalid name parameter",
    )
}

#[then("the response should indicate missing name parameter")]
fn missing_name(world: &mut AgifyWorld) -> AssertionResult {
    ensure(
        is_error_outcome(&world.state),
        "Expected error for missing name parameter",
    )
}

#[then(expr = "the response time should be less than {int} seconds")]
fn response_time(world: &mut AgifyWorld, seconds: u64) -> AssertionResult {
    let elapsed = world.state.elapsed(keys::RESPONSE_TIME)?;
    ensure(
        validate_response_time(elapsed, Duration::from_secs(seconds)),
        format!(
            "Expected response time to be less than {} seconds but got {}ms",
            seconds,
            elapsed.as_millis()
        ),
    )
}

#[then("the response time should be within the service limit")]
fn response_time_within_limit(world: &mut AgifyWorld) -> AssertionResult {
    let elapsed = world.state.elapsed(keys::RESPONSE_TIME)?;
    ensure(
        validate_response_time(elapsed, MAX_RESPONSE_TIME),
        format!(
            "Expected response time to be less than {}ms but got {}ms",
            MAX_RESPONSE_TIME.as_millis(),
            elapsed.as_millis()
        ),
    )
}

#[then("both responses should return the same age")]
fn same_age(world: &mut AgifyWorld) -> AssertionResult {
    let first = world.state.prediction()?;
    let second = world.state.stored_response(keys::SECOND_RESPONSE)?.prediction()?;
    ensure(
        first.age == second.age,
        format!(
            "Expected both responses to have same age but got {:?} and {:?}",
            first.age, second.age
        ),
    )
}

#[then("both responses should return the same count")]
fn same_count(world: &mut AgifyWorld) -> AssertionResult {
    let first = world.state.prediction()?;
    let second = world.state.stored_response(keys::SECOND_RESPONSE)?.prediction()?;
    ensure(
        first.count == second.count,
        format!(
            "Expected both responses to have same count but got {} and {}",
            first.count, second.count
        ),
    )
}

#[then("both responses should be identical")]
fn identical_responses(world: &mut AgifyWorld) -> AssertionResult {
    let first = world.state.prediction()?;
    let second = world.state.stored_response(keys::SECOND_RESPONSE)?.prediction()?;
    ensure(
        compare_responses(&first, &second),
        format!("Expected identical responses but got {:?} and {:?}", first, second),
    )
}

#[then("both responses should have valid numeric counts")]
fn both_counts_numeric(world: &mut AgifyWorld) -> AssertionResult {
    let first = world.state.response_data()?.get("count").and_then(Value::as_u64);
    let second = world
        .state
        .stored_response(keys::SECOND_RESPONSE)?
        .data
        .get("count")
        .and_then(Value::as_u64);

    ensure(
        first.is_some(),
        "Expected first response count to be a non-negative number",
    )?;
    ensure(
        second.is_some(),
        "Expected second response count to be a non-negative number",
    )
}

