use derive_more::Display;
use std::fmt::{Display as FmtDisplay, Formatter, Result as FmtResult};

/// HTTP method of a [`Request`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
}

/// A page request: GET parameters travel in the query string, POST
/// parameters as a URL-encoded form body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub params: Vec<(String, String)>,
}
impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Appends a parameter, keeping insertion order.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}
impl FmtDisplay for Request {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.method, self.url)?;
        if !self.params.is_empty() {
            let params: Vec<_> = self.params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, " [{}]", params.join("&"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Request::get("http://example.test/a.html"), "GET http://example.test/a.html")]
    #[case(Request::post("http://example.test/search.php").param("q", "foo show"), "POST http://example.test/search.php [q=foo show]")]
    fn test_display(#[case] request: Request, #[case] expected: &str) {
        assert_eq!(request.to_string(), expected);
    }
}
