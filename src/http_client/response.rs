use bytes::Bytes;
use http::StatusCode;

use crate::http_client::request::RequestHeaders;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: RequestHeaders,
    pub body: Bytes,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn status_text(&self) -> Option<String> {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .map(str::to_string)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
