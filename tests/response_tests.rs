use contact_form::api::helpers::{cors_headers, err_response, ok_response, preflight};
use contact_form::errors::ContactError;

/// These verify the proxy response payloads API Gateway receives,
/// including CORS headers on failure paths.

#[test]
fn test_preflight_payload() {
    let response = preflight(cors_headers(Some("https://example.com")));
    let payload = serde_json::to_value(&response).unwrap();

    assert_eq!(payload["statusCode"], 200);
    assert_eq!(payload["body"], "");
    assert_eq!(
        payload["headers"]["Access-Control-Allow-Origin"],
        "https://example.com"
    );
    assert_eq!(
        payload["headers"]["Access-Control-Allow-Headers"],
        "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Requested-With"
    );
}

#[test]
fn test_success_payload_has_no_error_field() {
    let response = ok_response(cors_headers(None), "Wysłano!");
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Wysłano!");
    assert!(body.get("error").is_none());
}

#[test]
fn test_error_payloads_keep_cors_headers() {
    let cases = [
        (ContactError::Validation("name".to_string()), 422),
        (ContactError::CaptchaRejected(vec![]), 403),
        (ContactError::AwsError("boom".to_string()), 500),
    ];

    for (error, status) in cases {
        let response = err_response(cors_headers(Some("https://example.com")), &error);
        assert_eq!(response.status_code, status);
        assert_eq!(
            response
                .headers
                .get("Access-Control-Allow-Origin")
                .map(String::as_str),
            Some("https://example.com")
        );

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
        assert!(body.get("message").is_none());
    }
}
