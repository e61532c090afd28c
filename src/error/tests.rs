//! Tests for error normalization

use std::error::Error as StdError;
use std::io;

use crate::error::{capture, capture_anyhow, ErrorModel, PresentableError, UnknownError};

#[derive(Debug)]
struct NetworkError;

impl PresentableError for NetworkError {
    fn failure_reason(&self) -> Option<String> {
        Some("Network".to_string())
    }

    fn error_description(&self) -> Option<String> {
        Some("Timed out".to_string())
    }
}

#[derive(Debug)]
struct ReasonOnly;

impl PresentableError for ReasonOnly {
    fn failure_reason(&self) -> Option<String> {
        Some("Sync".to_string())
    }
}

#[derive(Debug)]
struct DescriptionOnly(&'static str);

impl PresentableError for DescriptionOnly {
    fn error_description(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

#[derive(Debug)]
struct DiskFull;

impl PresentableError for DiskFull {
    fn localized_description(&self) -> Option<String> {
        Some("disk full".to_string())
    }
}

#[derive(Debug)]
struct Opaque;

impl PresentableError for Opaque {}

#[test]
fn structured_error_renders_verbatim() {
    let model = ErrorModel::new(Some(&NetworkError));
    assert_eq!(model.title, "Network");
    assert_eq!(model.message, "Timed out");
}

#[test]
fn missing_structured_fields_fall_back_individually() {
    let model = ErrorModel::new(Some(&ReasonOnly));
    assert_eq!(model.title, "Sync");
    assert_eq!(model.message, "Please try again.");

    let model = ErrorModel::new(Some(&DescriptionOnly("No connection.")));
    assert_eq!(model.title, "Error");
    assert_eq!(model.message, "No connection.");
}

#[test]
fn generic_description_gets_default_title() {
    let model = ErrorModel::new(Some(&DiskFull));
    assert_eq!(model.title, "Error");
    assert_eq!(model.message, "disk full");
}

#[test]
fn opaque_error_resolves_to_canonical_fallback() {
    let model = ErrorModel::new(Some(&Opaque));
    assert_eq!(model.title, "Error");
    assert_eq!(model.message, "Please try again.");
}

#[test]
fn absent_error_resolves_to_canonical_fallback() {
    let model = ErrorModel::new(None);
    assert_eq!(model.title, "Error");
    assert_eq!(model.message, "Please try again.");
}

#[test]
fn empty_string_description_is_not_absence() {
    let model = ErrorModel::new(Some(&DescriptionOnly("")));
    assert_eq!(model.title, "Error");
    assert_eq!(model.message, "");
}

#[test]
fn single_line_description_joins_title_and_message() {
    let model = ErrorModel {
        title: String::new(),
        message: "x".to_string(),
    };
    assert_eq!(model.description(), "x");

    let model = ErrorModel::from_message("x");
    assert_eq!(model.description(), "Error\nx");
}

#[test]
fn derivation_is_idempotent() {
    let first = ErrorModel::new(Some(&NetworkError));
    let second = ErrorModel::new(Some(&NetworkError));
    assert_eq!(first, second);
}

#[test]
fn captured_std_errors_present_their_display_text() {
    let error = capture(io::Error::new(io::ErrorKind::NotFound, "missing avatar"));
    let model = ErrorModel::new(Some(error.as_ref()));
    assert_eq!(model.title, "Error");
    assert_eq!(model.message, "missing avatar");
}

#[test]
fn captured_anyhow_errors_present_their_display_text() {
    let error = capture_anyhow(anyhow::anyhow!("profile fetch failed"));
    let model = ErrorModel::new(Some(error.as_ref()));
    assert_eq!(model.title, "Error");
    assert_eq!(model.message, "profile fetch failed");
}

#[test]
fn unknown_error_is_a_usable_error_value() {
    let unknown: &dyn StdError = &UnknownError;
    assert_eq!(unknown.to_string(), "Please try again.");

    let model = ErrorModel::new(Some(&UnknownError));
    assert_eq!(model.title, "Error");
    assert_eq!(model.message, "Please try again.");
}

#[test]
fn model_serializes_for_the_host_bridge() {
    let model = ErrorModel::new(Some(&NetworkError));
    let value = serde_json::to_value(&model).expect("model should serialize");
    assert_eq!(
        value,
        serde_json::json!({ "title": "Network", "message": "Timed out" })
    );
}
