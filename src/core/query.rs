use crate::domain::model::QueryParams;
use crate::utils::error::Result;
use url::form_urlencoded;
use url::Url;

pub const DEFAULT_API_PREFIX: &str = "umbraco/api";

/// Renders `?k=v&k2=v2`, skipping null and empty-string values.
///
/// Keys and values are written as-is, without percent-encoding. Returns
/// `None` when nothing is left to render.
pub fn build_query(params: &QueryParams) -> Option<String> {
    let query = params
        .iter()
        .filter(|(_, value)| !value.is_blank())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        None
    } else {
        Some(format!("?{}", query))
    }
}

/// Form-url-encoded body for `post_params`, skipping blank values.
pub fn form_body(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter().filter(|(_, value)| !value.is_blank()) {
        serializer.append_pair(key, &value.to_string());
    }
    serializer.finish()
}

/// Builds API endpoint URLs under a fixed prefix of the site origin.
#[derive(Debug, Clone)]
pub struct EndpointUrl {
    origin: String,
    prefix: String,
}

impl EndpointUrl {
    pub fn new(origin: &str, prefix: &str) -> Result<Self> {
        let parsed = Url::parse(origin)?;
        Ok(Self {
            origin: parsed.origin().ascii_serialization(),
            prefix: prefix.trim_matches('/').to_string(),
        })
    }

    pub fn with_default_prefix(origin: &str) -> Result<Self> {
        Self::new(origin, DEFAULT_API_PREFIX)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn url(&self, endpoint: &str, params: Option<&QueryParams>) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        let mut url = if self.prefix.is_empty() {
            format!("{}/{}", self.origin, endpoint)
        } else {
            format!("{}/{}/{}", self.origin, self.prefix, endpoint)
        };

        if let Some(query) = params.and_then(build_query) {
            url.push_str(&query);
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::QueryValue;

    #[test]
    fn test_build_query_skips_blank_values() {
        let params = QueryParams::new()
            .with("a", "")
            .with("b", QueryValue::Null)
            .with("c", 1);

        assert_eq!(build_query(&params).as_deref(), Some("?c=1"));
    }

    #[test]
    fn test_build_query_empty_is_none() {
        assert_eq!(build_query(&QueryParams::new()), None);

        let all_blank = QueryParams::new().with("a", "").with("b", None::<i64>);
        assert_eq!(build_query(&all_blank), None);
    }

    #[test]
    fn test_build_query_keeps_zero_and_false_unescaped() {
        let params = QueryParams::new()
            .with("page", 0)
            .with("active", false)
            .with("q", "red shoes&more");

        assert_eq!(
            build_query(&params).as_deref(),
            Some("?page=0&active=false&q=red shoes&more")
        );
    }

    #[test]
    fn test_form_body_encodes() {
        let params = QueryParams::new()
            .with("email", "a+b@example.com")
            .with("name", "Jens Hansen")
            .with("skip", "");

        assert_eq!(
            form_body(&params),
            "email=a%2Bb%40example.com&name=Jens+Hansen"
        );
    }

    #[test]
    fn test_endpoint_url() {
        let endpoints = EndpointUrl::with_default_prefix("https://www.example.dk/some/page").unwrap();
        assert_eq!(endpoints.origin(), "https://www.example.dk");
        assert_eq!(
            endpoints.url("Booking/GetSlots", None),
            "https://www.example.dk/umbraco/api/Booking/GetSlots"
        );

        let params = QueryParams::new().with("from", "2026-01-05").with("to", "");
        assert_eq!(
            endpoints.url("/Booking/GetSlots", Some(&params)),
            "https://www.example.dk/umbraco/api/Booking/GetSlots?from=2026-01-05"
        );

        let empty = QueryParams::new().with("x", "");
        assert_eq!(
            endpoints.url("Booking/GetSlots", Some(&empty)),
            "https://www.example.dk/umbraco/api/Booking/GetSlots"
        );
    }

    #[test]
    fn test_endpoint_url_custom_prefix_and_port() {
        let endpoints = EndpointUrl::new("http://localhost:8080", "/api/v2/").unwrap();
        assert_eq!(endpoints.url("items", None), "http://localhost:8080/api/v2/items");

        let bare = EndpointUrl::new("http://localhost:8080", "").unwrap();
        assert_eq!(bare.url("items", None), "http://localhost:8080/items");
    }

    #[test]
    fn test_endpoint_url_rejects_invalid_origin() {
        assert!(EndpointUrl::with_default_prefix("not a url").is_err());
    }
}
