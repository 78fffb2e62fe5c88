use super::types::{TattooStyle, ValidationReport};
use serde_json::Value;

/// Pure shape validation over duck-typed records. Every check runs
/// unconditionally and all failures are collected; nothing here panics or
/// returns early, so a report always enumerates the full damage.

fn required_string(record: &Value, key: &str, message: &str, errors: &mut Vec<String>) {
    match record.get(key) {
        Some(Value::String(s)) if !s.is_empty() => {}
        _ => errors.push(message.to_string()),
    }
}

fn optional_string(record: &Value, key: &str, message: &str, errors: &mut Vec<String>) {
    if let Some(value) = record.get(key)
        && !value.is_string()
    {
        errors.push(message.to_string());
    }
}

pub fn validate_portfolio_image(image: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    match image.get("id") {
        Some(Value::Number(n)) if n.as_u64().is_some_and(|id| id > 0) => {}
        _ => errors.push("Image ID is required and must be a positive number".to_string()),
    }

    required_string(
        image,
        "filename",
        "Filename is required and must be a string",
        &mut errors,
    );
    required_string(
        image,
        "title",
        "Title is required and must be a string",
        &mut errors,
    );
    required_string(
        image,
        "style",
        "Style is required and must be a string",
        &mut errors,
    );
    required_string(
        image,
        "placement",
        "Placement is required and must be a string",
        &mut errors,
    );
    required_string(
        image,
        "session_time",
        "Session time is required and must be a string",
        &mut errors,
    );

    optional_string(
        image,
        "description",
        "Description must be a string",
        &mut errors,
    );
    optional_string(
        image,
        "before_image",
        "Before image must be a string",
        &mut errors,
    );

    if let Some(tags) = image.get("tags") {
        match tags.as_array() {
            Some(entries) if entries.iter().all(Value::is_string) => {}
            _ => errors.push("Tags must be an array of strings".to_string()),
        }
    }

    if let Some(healed) = image.get("is_healed")
        && !healed.is_boolean()
    {
        errors.push("is_healed must be a boolean".to_string());
    }

    // Style membership is checked against the closed set even though the
    // typed enum would also reject it later; the report must name every
    // problem in one pass.
    if let Some(Value::String(style)) = image.get("style")
        && TattooStyle::from_name(style).is_none()
    {
        let allowed: Vec<&str> = TattooStyle::ALL.iter().map(|s| s.as_str()).collect();
        errors.push(format!("Style must be one of: {}", allowed.join(", ")));
    }

    ValidationReport::from_errors(errors)
}

pub fn validate_artist(artist: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    required_string(
        artist,
        "slug",
        "Artist slug is required and must be a string",
        &mut errors,
    );
    required_string(
        artist,
        "name",
        "Artist name is required and must be a string",
        &mut errors,
    );
    required_string(
        artist,
        "specialty",
        "Artist specialty is required and must be a string",
        &mut errors,
    );
    required_string(
        artist,
        "experience",
        "Artist experience is required and must be a string",
        &mut errors,
    );
    required_string(
        artist,
        "description",
        "Artist description is required and must be a string",
        &mut errors,
    );

    match artist.get("portfolio") {
        None => {}
        Some(Value::Array(images)) => {
            for (index, image) in images.iter().enumerate() {
                let report = validate_portfolio_image(image);
                // 1-based index so the message matches the data file a
                // maintainer is looking at.
                for error in report.errors {
                    errors.push(format!("Portfolio image {}: {}", index + 1, error));
                }
            }
        }
        Some(_) => errors.push("Portfolio must be an array".to_string()),
    }

    ValidationReport::from_errors(errors)
}
