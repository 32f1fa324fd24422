use astra::Request;
use std::io::Read;

use crate::errors::ServerError;

/// Upper bound on accepted request bodies.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, in submission order.
/// Repeated keys (checkbox groups) are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn parse(input: &[u8]) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(input).into_owned().collect(),
        }
    }

    /// First value for `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.opt(key).unwrap_or("")
    }

    pub fn opt(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

pub fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read request body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(buf)
}

pub fn read_form(req: &mut Request) -> Result<FormFields, ServerError> {
    let body = read_body(req)?;
    Ok(FormFields::parse(&body))
}

pub fn parse_query(req: &Request) -> FormFields {
    req.uri()
        .query()
        .map(|q| FormFields::parse(q.as_bytes()))
        .unwrap_or_default()
}

/// Value of the named cookie from the `Cookie` header, if present.
pub fn cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra::Body;

    #[test]
    fn form_decodes_plus_and_percent() {
        let form = FormFields::parse(b"guest_name=Ana+Lima&guest_email=ana%40example.com");
        assert_eq!(form.get("guest_name"), "Ana Lima");
        assert_eq!(form.get("guest_email"), "ana@example.com");
        assert_eq!(form.get("missing"), "");
        assert_eq!(form.opt("missing"), None);
    }

    #[test]
    fn repeated_keys_are_kept_in_order() {
        let form = FormFields::parse(b"amenities=WiFi&amenities=Pool&x=1");
        let all: Vec<&str> = form.get_all("amenities").collect();
        assert_eq!(all, vec!["WiFi", "Pool"]);
        assert_eq!(form.get("amenities"), "WiFi");
    }

    #[test]
    fn query_string_is_parsed() {
        let req = http::Request::builder()
            .uri("/homestays?q=bali&max_price=50")
            .body(Body::empty())
            .unwrap();
        let q = parse_query(&req);
        assert_eq!(q.get("q"), "bali");
        assert_eq!(q.get("max_price"), "50");
    }

    #[test]
    fn cookie_lookup_handles_multiple_pairs() {
        let req = http::Request::builder()
            .uri("/")
            .header("Cookie", "theme=dark; session=abc123; other=x")
            .body(Body::empty())
            .unwrap();
        assert_eq!(cookie(&req, "session").as_deref(), Some("abc123"));
        assert_eq!(cookie(&req, "missing"), None);
    }

    #[test]
    fn oversized_body_is_rejected() {
        let big = vec![b'a'; MAX_BODY_BYTES as usize + 10];
        let mut req = http::Request::builder()
            .method("POST")
            .uri("/contact")
            .body(Body::from(big))
            .unwrap();
        assert!(matches!(read_body(&mut req), Err(ServerError::BadRequest(_))));
    }
}
