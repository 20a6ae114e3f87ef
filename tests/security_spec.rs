use axum::{http::HeaderMap, middleware, routing::get, Extension, Router};
use axum_test::{TestResponse, TestServer};
use pivdocs::api::{create_router, security_headers, CspNonce, SecurityPolicy, NONCE_HEADER};
use pivdocs::config::{Environment, SiteConfig};

fn setup(environment: Environment) -> TestServer {
    let config = SiteConfig {
        environment,
        hsts_max_age: 31_536_000,
        ..SiteConfig::default()
    };
    TestServer::new(create_router(config)).expect("Failed to create test server")
}

fn header(response: &TestResponse, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn csp_header(server: &TestServer, path: &str) -> String {
    header(&server.get(path).await, "content-security-policy").unwrap_or_default()
}

/// Pull the nonce out of `script-src ... 'nonce-XYZ' ...`.
fn csp_nonce(csp: &str) -> String {
    let start = csp.find("'nonce-").expect("policy has a nonce") + "'nonce-".len();
    let end = csp[start..].find('\'').expect("nonce is quoted") + start;
    csp[start..end].to_string()
}

const ALWAYS_PRESENT: &[&str] = &[
    "content-security-policy",
    "x-frame-options",
    "x-content-type-options",
    "referrer-policy",
    "permissions-policy",
];

const PATHS: &[&str] = &[
    "/",
    "/manual",
    "/manual/calibration",
    "/assets/site.css",
    "/robots.txt",
    "/sitemap.xml",
    "/health",
    "/no/such/page",
    "/variant/next",
];

mod headers {
    use super::*;

    #[tokio::test]
    async fn every_route_carries_the_security_headers() {
        let server = setup(Environment::Development);

        for path in PATHS {
            let response = server.get(path).await;
            for name in ALWAYS_PRESENT {
                assert!(
                    header(&response, name).is_some(),
                    "{} missing on {}",
                    name,
                    path
                );
            }
        }
    }

    #[tokio::test]
    async fn static_header_values() {
        let server = setup(Environment::Development);

        let response = server.get("/").await;

        assert_eq!(header(&response, "x-frame-options").as_deref(), Some("DENY"));
        assert_eq!(
            header(&response, "x-content-type-options").as_deref(),
            Some("nosniff")
        );
        assert_eq!(
            header(&response, "referrer-policy").as_deref(),
            Some("strict-origin-when-cross-origin")
        );
        let permissions = header(&response, "permissions-policy").unwrap_or_default();
        assert!(permissions.contains("camera=()"));
        assert!(permissions.contains("microphone=()"));
    }

    #[tokio::test]
    async fn hsts_is_absent_in_development() {
        let server = setup(Environment::Development);

        let response = server.get("/").await;

        assert!(header(&response, "strict-transport-security").is_none());
    }

    #[tokio::test]
    async fn hsts_is_present_in_production() {
        let server = setup(Environment::Production);

        for path in PATHS {
            let response = server.get(path).await;
            assert_eq!(
                header(&response, "strict-transport-security").as_deref(),
                Some("max-age=31536000; includeSubDomains; preload"),
                "on {}",
                path
            );
        }
    }
}

mod content_security_policy {
    use super::*;

    #[tokio::test]
    async fn policy_is_well_formed() {
        for environment in [Environment::Development, Environment::Production] {
            let server = setup(environment);
            let csp = csp_header(&server, "/").await;

            assert!(!csp.is_empty());
            assert!(!csp.ends_with(';'));
            for directive in csp.split("; ") {
                let name = directive.split(' ').next().unwrap_or_default();
                assert!(!name.is_empty(), "empty directive in {}", csp);
                assert!(
                    name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                    "bad directive name {:?}",
                    name
                );
            }
            assert!(csp.starts_with("default-src 'self'"));
            assert!(csp.contains("frame-ancestors 'none'"));
            assert!(csp.contains("object-src 'none'"));
        }
    }

    #[tokio::test]
    async fn production_policy_is_strict() {
        let server = setup(Environment::Production);

        let csp = csp_header(&server, "/").await;

        assert!(!csp.contains("'unsafe-eval'"));
        assert!(!csp.contains("'unsafe-inline'"));
        assert!(csp.ends_with("upgrade-insecure-requests"));
    }

    #[tokio::test]
    async fn development_policy_allows_eval() {
        let server = setup(Environment::Development);

        let csp = csp_header(&server, "/").await;

        assert!(csp.contains("'unsafe-eval'"));
        assert!(!csp.contains("upgrade-insecure-requests"));
    }

    #[tokio::test]
    async fn nonce_differs_between_requests() {
        let server = setup(Environment::Production);

        let first = csp_header(&server, "/").await;
        let second = csp_header(&server, "/").await;

        assert_ne!(csp_nonce(&first), csp_nonce(&second));
    }

    #[tokio::test]
    async fn nonce_is_used_for_scripts_and_styles() {
        let server = setup(Environment::Production);

        let csp = csp_header(&server, "/").await;
        let nonce = csp_nonce(&csp);

        assert!(csp.contains(&format!(
            "script-src 'self' 'nonce-{}' 'strict-dynamic'",
            nonce
        )));
        assert!(csp.contains(&format!("style-src 'self' 'nonce-{}'", nonce)));
    }

    #[tokio::test]
    async fn inline_tags_match_the_header_nonce() {
        let server = setup(Environment::Production);

        let response = server.get("/manual/analysis").await;
        let nonce = csp_nonce(&header(&response, "content-security-policy").unwrap_or_default());
        let body = response.text();

        assert!(body.contains(&format!("<script nonce=\"{}\">", nonce)));
        assert!(body.contains(&format!("<style nonce=\"{}\">", nonce)));
    }

    #[tokio::test]
    async fn not_found_page_has_no_inline_code() {
        let server = setup(Environment::Production);

        let body = server.get("/missing").await.text();

        assert!(!body.contains("<script"));
        assert!(!body.contains("<style"));
    }

    #[tokio::test]
    async fn handlers_see_the_response_nonce() {
        // Echo what a handler observes: the forwarded header and the extension.
        let app = Router::new()
            .route(
                "/echo",
                get(
                    |headers: HeaderMap, Extension(nonce): Extension<CspNonce>| async move {
                        let forwarded = headers
                            .get(NONCE_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default()
                            .to_string();
                        format!("{}\n{}", forwarded, nonce.as_str())
                    },
                ),
            )
            .layer(middleware::from_fn_with_state(
                SecurityPolicy::development(),
                security_headers,
            ));
        let server = TestServer::new(app).expect("Failed to create test server");

        let response = server.get("/echo").await;
        let nonce = csp_nonce(&header(&response, "content-security-policy").unwrap_or_default());
        let body = response.text();
        let (forwarded, extension) = body.split_once('\n').expect("two lines");

        assert!(!nonce.is_empty());
        assert_eq!(forwarded, nonce);
        assert_eq!(extension, nonce);
    }
}
