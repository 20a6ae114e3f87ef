//! Security header middleware.
//!
//! Every request gets a fresh CSP nonce. The nonce is handed to handlers
//! through the request extensions (and the `x-nonce` request header) so they
//! can stamp inline `<script>` and `<style>` tags, and the response leaves
//! with the full security header set.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config::SiteConfig;
use crate::error::SiteError;

/// Number of random bytes behind each nonce (128 bits).
pub const NONCE_BYTES: usize = 16;

pub const NONCE_HEADER: &str = "x-nonce";

pub const PERMISSIONS_POLICY: &str =
    "camera=(), microphone=(), geolocation=(), browsing-topics=()";

/// A per-request nonce for the Content-Security-Policy header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspNonce(String);

impl CspNonce {
    /// Draw a new nonce from the operating system's CSPRNG.
    pub fn generate() -> Result<Self, SiteError> {
        let mut bytes = [0u8; NONCE_BYTES];
        getrandom::fill(&mut bytes).map_err(|e| SiteError::Entropy(e.to_string()))?;
        Ok(Self(STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CspNonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The header policy, fixed at startup from the site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityPolicy {
    pub production: bool,
    pub hsts_max_age: u64,
}

impl SecurityPolicy {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            production: config.is_production(),
            hsts_max_age: config.hsts_max_age,
        }
    }

    pub fn development() -> Self {
        Self {
            production: false,
            hsts_max_age: 0,
        }
    }

    pub fn production(hsts_max_age: u64) -> Self {
        Self {
            production: true,
            hsts_max_age,
        }
    }

    /// Directives as `(name, sources)` pairs, in emission order.
    pub fn directives(&self, nonce: &CspNonce) -> Vec<(&'static str, Vec<String>)> {
        let nonce_src = format!("'nonce-{}'", nonce);

        let mut script_src = vec![
            "'self'".to_string(),
            nonce_src.clone(),
            "'strict-dynamic'".to_string(),
        ];
        let mut connect_src = vec!["'self'".to_string()];
        if !self.production {
            // Dev tooling evaluates source maps and opens a reload socket.
            script_src.push("'unsafe-eval'".to_string());
            connect_src.push("ws:".to_string());
        }

        let mut directives = vec![
            ("default-src", vec!["'self'".to_string()]),
            ("script-src", script_src),
            ("style-src", vec!["'self'".to_string(), nonce_src]),
            (
                "img-src",
                vec!["'self'".to_string(), "blob:".to_string(), "data:".to_string()],
            ),
            ("font-src", vec!["'self'".to_string()]),
            ("connect-src", connect_src),
            ("object-src", vec!["'none'".to_string()]),
            ("base-uri", vec!["'self'".to_string()]),
            ("form-action", vec!["'self'".to_string()]),
            ("frame-ancestors", vec!["'none'".to_string()]),
        ];
        if self.production {
            directives.push(("upgrade-insecure-requests", Vec::new()));
        }
        directives
    }

    /// The Content-Security-Policy header value for one request.
    pub fn content_security_policy(&self, nonce: &CspNonce) -> String {
        self.directives(nonce)
            .into_iter()
            .map(|(name, sources)| {
                if sources.is_empty() {
                    name.to_string()
                } else {
                    format!("{} {}", name, sources.join(" "))
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Every response header this policy sets, CSP included.
    pub fn headers(&self, nonce: &CspNonce) -> Vec<(HeaderName, String)> {
        let mut headers = vec![
            (
                header::CONTENT_SECURITY_POLICY,
                self.content_security_policy(nonce),
            ),
            (header::X_FRAME_OPTIONS, "DENY".to_string()),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff".to_string()),
            (
                header::REFERRER_POLICY,
                "strict-origin-when-cross-origin".to_string(),
            ),
            (
                HeaderName::from_static("permissions-policy"),
                PERMISSIONS_POLICY.to_string(),
            ),
        ];
        if self.production {
            headers.push((
                header::STRICT_TRANSPORT_SECURITY,
                format!("max-age={}; includeSubDomains; preload", self.hsts_max_age),
            ));
        }
        headers
    }
}

/// Mint a nonce, expose it to handlers, and stamp the security headers.
pub async fn security_headers(
    State(policy): State<SecurityPolicy>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let nonce = match CspNonce::generate() {
        Ok(nonce) => nonce,
        Err(e) => return e.into_response(),
    };

    match HeaderValue::from_str(nonce.as_str()) {
        Ok(value) => {
            request
                .headers_mut()
                .insert(HeaderName::from_static(NONCE_HEADER), value);
        }
        Err(e) => return SiteError::InvalidHeader(e.to_string()).into_response(),
    }
    request.extensions_mut().insert(nonce.clone());

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    for (name, value) in policy.headers(&nonce) {
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(e) => {
                tracing::error!("Dropping unencodable {} header: {}", name, e);
            }
        }
    }

    response
}
