//! Integration tests for the request adapter against a mock engine

use redactify_core::engine::{EngineRequest, PiiEngine};
use redactify_core::{Config, Error, Language, Policy, Redactor, Result, Session};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// What the mock saw for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
struct Recorded {
    text: String,
    language: Language,
    policy: Policy,
    config: Option<PathBuf>,
}

/// Engine double that records every request and echoes a canned response
struct MockEngine {
    calls: Mutex<Vec<Recorded>>,
    response: String,
}

impl MockEngine {
    fn returning(response: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: response.to_string(),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn last_call(&self) -> Recorded {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }
}

impl PiiEngine for MockEngine {
    fn transform(&self, request: &EngineRequest<'_>) -> Result<String> {
        self.calls.lock().unwrap().push(Recorded {
            text: request.text().to_string(),
            language: request.language(),
            policy: request.policy(),
            config: request.config().map(Into::into),
        });
        Ok(self.response.clone())
    }
}

/// Engine double that always fails
struct FailingEngine;

impl PiiEngine for FailingEngine {
    fn transform(&self, _request: &EngineRequest<'_>) -> Result<String> {
        Err(Error::Engine("model not available".into()))
    }
}

#[test]
fn empty_input_short_circuits_for_every_policy() {
    let engine = MockEngine::returning("should never be seen");
    let redactor = Redactor::new(engine.clone());
    let session = Session::new();

    for policy in Policy::ALL {
        let result = redactor.process(&session, "", policy).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.text(), "");
    }

    assert_eq!(engine.call_count(), 0);
}

#[test]
fn policy_name_is_normalized_before_the_request() {
    let engine = MockEngine::returning("out");
    let redactor = Redactor::new(engine.clone());
    let session = Session::new();

    redactor.process_named(&session, "hello", "REDACT").unwrap();
    assert_eq!(engine.last_call().policy, Policy::Redact);

    redactor
        .process_named(&session, "hello", "Placeholder")
        .unwrap();
    assert_eq!(engine.last_call().policy, Policy::Placeholder);
}

#[test]
fn invalid_policy_name_never_reaches_the_engine() {
    let engine = MockEngine::returning("out");
    let redactor = Redactor::new(engine.clone());
    let session = Session::new();

    let err = redactor
        .process_named(&session, "hello", "anonymise")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPolicy(_)));
    assert_eq!(engine.call_count(), 0);
}

#[test]
fn language_selection_applies_to_subsequent_calls() {
    let engine = MockEngine::returning("out");
    let redactor = Redactor::new(engine.clone());
    let mut session = Session::new();

    redactor
        .process(&session, "hello", Policy::Annotate)
        .unwrap();
    assert_eq!(engine.last_call().language.code(), "en");

    session.select_language("Italian").unwrap();

    // Language is read at call time, whichever policy is used.
    for policy in Policy::ALL {
        redactor.process(&session, "ciao", policy).unwrap();
        assert_eq!(engine.last_call().language.code(), "it");
    }
}

#[test]
fn engine_config_path_is_threaded_through() {
    let engine = MockEngine::returning("out");
    let config = Config::builder()
        .engine_config("config.json")
        .build()
        .unwrap();
    let redactor = Redactor::with_config(engine.clone(), config);

    redactor
        .process(&Session::new(), "hello", Policy::Annotate)
        .unwrap();
    assert_eq!(
        engine.last_call().config,
        Some(PathBuf::from("config.json"))
    );
}

#[test]
fn engine_output_is_returned_verbatim_as_plain_text() {
    let engine = MockEngine::returning("Call <PHONE_NUMBER:1> now");
    let redactor = Redactor::new(engine);

    let result = redactor
        .process(&Session::new(), "Call 555-0100 now", Policy::Annotate)
        .unwrap();
    assert_eq!(result.text(), "Call <PHONE_NUMBER:1> now");
}

#[test]
fn highlighted_rendition_comes_from_the_same_call() {
    let engine = MockEngine::returning("<PII>");
    let redactor = Redactor::new(engine);

    let result = redactor
        .process(&Session::new(), "Jane Doe", Policy::Placeholder)
        .unwrap();

    assert_eq!(result.text(), "<PII>");
    let html = result.to_html();
    assert!(html.contains("color: orange"));
    assert!(!html.contains("<PII>"));
}

#[test]
fn engine_failure_surfaces_as_an_error() {
    let redactor = Redactor::new(Arc::new(FailingEngine));

    let err = redactor
        .process(&Session::new(), "hello", Policy::Annotate)
        .unwrap_err();
    assert!(matches!(err, Error::Engine(_)));
    assert!(err.to_string().contains("model not available"));
}

#[test]
fn default_policy_comes_from_configuration() {
    let engine = MockEngine::returning("out");
    let config = Config::builder().default_policy("synthetic").build().unwrap();
    let redactor = Redactor::with_config(engine.clone(), config);

    redactor.process_default(&Session::new(), "hello").unwrap();
    assert_eq!(engine.last_call().policy, Policy::Synthetic);
}
