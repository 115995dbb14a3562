use encoding_rs::Encoding;
use reqwest::StatusCode;
use url::Url;

/// A menu page after decoding to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub encoding: &'static Encoding,
    pub body_utf8: String,
}
