//! Verify `build_config` against JSON test vectors stored in `test-vectors/`.
//!
//! Each case names a base profile, a verb, the call parameters and either the
//! expected descriptor or the expected build error. Descriptors are compared
//! as parsed JSON so key order does not matter.

use fetch_factory::{BaseProfile, BuildError, FetchFactory, Headers, RequestConfig, RequestParams};
use serde_json::Value;

fn params_from(case: &Value) -> RequestParams {
    let raw = &case["params"];
    let mut params = RequestParams::new(raw["path"].as_str().unwrap());
    if let Some(body) = raw.get("body") {
        params = params.body(body.clone());
    }
    if let Some(headers) = raw.get("headers") {
        let headers: Headers = serde_json::from_value(headers.clone()).unwrap();
        params = params.headers(headers);
    }
    if let Some(options) = raw.get("options") {
        let options: RequestConfig = serde_json::from_value(options.clone()).unwrap();
        params = params.options(options);
    }
    params
}

/// The method a verb fixes, or the caller's for `fetch`.
fn method_for(case: &Value) -> Option<&str> {
    match case["verb"].as_str().unwrap() {
        "fetch" => case["method"].as_str(),
        verb @ ("get" | "post" | "put" | "delete") => Some(verb),
        other => panic!("unknown verb: {other}"),
    }
}

#[test]
fn build_test_vectors() {
    let raw = include_str!("../../test-vectors/build.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let profile: BaseProfile = serde_json::from_value(case["profile"].clone()).unwrap();
        let factory = FetchFactory::new(profile, ());
        let config_before = factory.base_config().clone();

        let result = factory.build_config(method_for(case), params_from(case));

        match case.get("expected_error").and_then(Value::as_str) {
            Some("missing_method") => {
                let err = result.unwrap_err();
                assert!(matches!(err, BuildError::MissingMethod { .. }), "{name}: error");
            }
            Some(other) => panic!("{name}: unknown expected_error {other}"),
            None => {
                let req = result.unwrap_or_else(|e| panic!("{name}: {e}"));
                let actual = serde_json::to_value(&req).unwrap();
                assert_eq!(actual, case["expected_request"], "{name}: descriptor");
            }
        }

        assert_eq!(factory.base_config(), &config_before, "{name}: base config mutated");
    }
}
