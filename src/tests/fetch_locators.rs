#[cfg(test)]
mod test {
    use std::path::PathBuf;
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use crate::errors::FetchError;
    use crate::handlers::{AccessToken, TokenHandler};
    use crate::sources::{FetchRaw, Locator, UrlFetcher};
    use crate::tests::common::{calls, mock_base, settings, token_file, MockRepo};

    #[test]
    fn parses_supported_locators() {
        assert_eq!(Locator::parse("file:///etc/token").unwrap(), Locator::File(PathBuf::from("/etc/token")));
        assert_eq!(
            Locator::parse("file://localhost/etc/token").unwrap(),
            Locator::File(PathBuf::from("/etc/token"))
        );
        assert_eq!(Locator::parse("/etc/token").unwrap(), Locator::File(PathBuf::from("/etc/token")));
        assert_eq!(
            Locator::parse("HTTPS://example.com/token").unwrap(),
            Locator::Http("HTTPS://example.com/token".to_owned())
        );
    }

    #[test]
    fn rejects_unknown_schemes() {
        assert!(matches!(Locator::parse("ftp://host/token"), Err(FetchError::UnsupportedLocator(_))));
        assert!(matches!(Locator::parse("file://remote-host/token"), Err(FetchError::UnsupportedLocator(_))));
    }

    #[test]
    fn reads_file_locator() {
        let (_file, locator) = token_file("raw-token");

        let raw = UrlFetcher::default().fetch_raw(&locator).unwrap();

        assert_eq!(raw, "raw-token");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = UrlFetcher::default().fetch_raw("Not_existed").unwrap_err();

        assert!(matches!(err, FetchError::NotFound(_)));
    }

    #[test]
    fn fetches_http_locator() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/token");
            then.status(200).body(r#"{"token":"t"}"#);
        });

        let raw = UrlFetcher::new(Duration::from_secs(5)).fetch_raw(&server.url("/token")).unwrap();

        mock.assert();
        assert_eq!(raw, r#"{"token":"t"}"#);
    }

    #[test]
    fn http_404_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let err = UrlFetcher::default().fetch_raw(&server.url("/missing")).unwrap_err();

        assert!(matches!(err, FetchError::NotFound(_)));
    }

    #[test]
    fn http_server_error_is_reported_with_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(500).body("transient");
        });

        let err = UrlFetcher::default().fetch_raw(&server.url("/broken")).unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 500, .. }));
    }

    #[test]
    fn access_token_over_http_sets_headers_once() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/accesstoken");
            then.status(200)
                .header("content-type", "application/json")
                .body(json!({"token": "http_token", "token_id": "http_id"}).to_string());
        });
        let mut base = mock_base(MockRepo::with_accesstoken(&server.url("/accesstoken")));

        AccessToken::new(&mut base, settings()).config().unwrap();

        mock.assert();
        assert_eq!(calls(&base), [vec!["X-Access-Token:http_token".to_owned(), "Referer:http_id".to_owned()]]);
    }

    #[test]
    fn access_token_over_http_404_is_ignored() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(404);
        });
        let mut base = mock_base(MockRepo::with_accesstoken(&server.url("/gone")));

        AccessToken::new(&mut base, settings()).config().unwrap();

        mock.assert();
        assert!(calls(&base).is_empty());
    }
}
