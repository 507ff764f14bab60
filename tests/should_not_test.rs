mod common;

#[cfg(test)]
mod should_not {
    use http_should::{
        Cookie, Error, FsResourceLoader, Polarity, Response, ResponseShould, ShouldNot,
    };
    use regex::Regex;

    use crate::common::{is_assertion_failure, resources_dir};

    const KEYS: &str = r#"{ "key1": "value1", "key2": "value2" }"#;

    fn my_header() -> Response {
        Response::new(200).with_header("my_header", "my_header_value")
    }

    #[test]
    fn should_pass_with_a_non_matching_status() {
        let response = Response::new(200);

        assert!(ShouldNot::new(&response).have_status(400).is_ok());
    }

    #[test]
    fn should_fail_with_a_matching_status() {
        let response = Response::new(200);

        let err = ShouldNot::new(&response).have_status(200).unwrap_err();

        match err {
            Error::Assertion(failure) => {
                assert_eq!(failure.polarity, Polarity::ShouldNot);
                assert_eq!(failure.operation, "have status");
                assert_eq!(
                    failure.to_string(),
                    "Response should not have status: expected 200 OK but was 200 OK"
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn should_pass_with_non_matching_headers() {
        let response = my_header();
        let should_not = ShouldNot::new(&response);

        assert!(should_not.have_header("not_my_header").is_ok());
        assert!(
            should_not
                .have_header_value("my_header", "not_my_header_value")
                .is_ok()
        );
        assert!(
            should_not
                .have_header_matching("my_header", &Regex::new("^not_").unwrap())
                .is_ok()
        );
        assert!(
            should_not
                .have_header_satisfying("my_header", |v| v.is_empty())
                .is_ok()
        );
        assert!(
            should_not
                .have_header_values("my_header", &["my_header_value", "extra"])
                .is_ok()
        );
    }

    #[test]
    fn should_fail_with_matching_headers() {
        let response = my_header();
        let should_not = ShouldNot::new(&response);

        assert!(is_assertion_failure(should_not.have_header("my_header")));
        assert!(is_assertion_failure(
            should_not.have_header_value("my_header", "my_header_value")
        ));
        assert!(is_assertion_failure(
            should_not.have_header_values("my_header", &["my_header_value"])
        ));
    }

    #[test]
    fn should_pass_with_a_non_matching_content_type() {
        let response = Response::new(200).with_content_type(&mime::APPLICATION_JSON);

        assert!(
            ShouldNot::new(&response)
                .have_content_type(&mime::TEXT_CSV)
                .is_ok()
        );
        assert!(is_assertion_failure(
            ShouldNot::new(&response).have_content_type(&mime::APPLICATION_JSON)
        ));
    }

    #[test]
    fn should_pass_when_the_cookie_is_absent_or_has_another_value() {
        let response = Response::new(200).with_cookie(&Cookie::new("my_cookie", "my_cookie_value"));
        let should_not = ShouldNot::new(&response);

        assert!(
            should_not
                .have_cookie(&Cookie::new("not_my_cookie", "my_cookie_value"))
                .is_ok()
        );
        assert!(
            should_not
                .have_cookie(&Cookie::new("my_cookie", "not_my_cookie_value"))
                .is_ok()
        );
        assert!(
            ShouldNot::new(&Response::new(200))
                .have_cookie(&Cookie::new("my_cookie", "my_cookie_value"))
                .is_ok()
        );
        assert!(is_assertion_failure(
            should_not.have_cookie(&Cookie::new("my_cookie", "my_cookie_value"))
        ));
    }

    #[test]
    fn should_pass_with_non_matching_bodies() {
        let response = Response::new(200).with_body("This is the body string");
        let should_not = ShouldNot::new(&response);

        assert!(should_not.have_body_satisfying(|body| body.is_empty()).is_ok());
        assert!(should_not.have_body("This is not the body string").is_ok());
        assert!(is_assertion_failure(
            should_not.have_body("This is the body string")
        ));
    }

    #[test]
    fn should_pass_json_shape_checks_on_the_wrong_shape() {
        let invalid = Response::new(200).with_body("{}}");
        let array = Response::new(200).with_body("[]");
        let object = Response::new(200).with_body("{}");

        assert!(ShouldNot::new(&invalid).be_valid_json().is_ok());
        assert!(ShouldNot::new(&invalid).be_json_object().is_ok());
        assert!(ShouldNot::new(&array).be_json_object().is_ok());
        assert!(ShouldNot::new(&object).be_json_array().is_ok());
        assert!(is_assertion_failure(ShouldNot::new(&object).be_valid_json()));
    }

    #[test]
    fn should_pass_with_non_equal_json() {
        let response = Response::new(200).with_body(KEYS);
        let should_not = ShouldNot::new(&response);

        assert!(should_not.equal_json(r#"{"key1":"value1"}"#).is_ok());
        assert!(
            should_not
                .equal_specified_json(r#"{"key3":"value3"}"#)
                .is_ok()
        );
        assert!(is_assertion_failure(
            should_not.equal_specified_json(r#"{"key1":"value1"}"#)
        ));
    }

    #[test]
    fn should_pass_with_missing_json_keys() {
        let response = Response::new(200).with_body(KEYS);
        let should_not = ShouldNot::new(&response);

        assert!(should_not.contain_json_key("key3").is_ok());
        assert!(should_not.contain_json_key("").is_ok());
        assert!(should_not.contain_json_key(".").is_ok());
        assert!(should_not.contain_json_key_value("key1", "value2").is_ok());
        assert!(is_assertion_failure(should_not.contain_json_key("key1")));
    }

    #[test]
    fn should_pass_with_non_matching_resources() {
        let response = Response::new(200).with_body(r#"{ "key1": "value1" }"#);
        let loader = FsResourceLoader::new(resources_dir());
        let should_not = ShouldNot::with_resource_loader(&response, &loader);

        assert!(should_not.match_json_resource("json_resource.json").is_ok());
        assert!(should_not.match_resource("text_resource.txt").is_ok());
        assert!(matches!(
            should_not.match_resource("missing.txt"),
            Err(Error::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn should_chain_with_should() {
        let response = Response::new(201).with_body("[1, 2]");

        let returned = response
            .should_not(|s| {
                s.have_status(200)?;
                s.be_json_object()
            })
            .and_then(|r| r.should(|s| s.be_json_array()))
            .unwrap();

        assert!(std::ptr::eq(returned, &response));
    }
}
