use reqwest::Url;
use reqwest::blocking::{Client, Request};
use serde_json::Value;

use super::{SearchError, SearchRequest};

/// Performs one search exchange and returns the parsed response body.
///
/// Implementations block the calling thread; the UI only ever calls them from
/// a worker thread spawned per request.
pub trait SearchBackend: Send + Sync + 'static {
	fn search(&self, request: &SearchRequest) -> Result<Value, SearchError>;
}

/// [`SearchBackend`] that posts JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	endpoint: Url,
}

impl HttpBackend {
	pub fn new(endpoint: Url) -> Result<Self, SearchError> {
		// The blocking client defaults to a 30 second total timeout.
		let client = Client::builder().timeout(None).build()?;
		Ok(Self { client, endpoint })
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	fn build_request(&self, request: &SearchRequest) -> Result<Request, SearchError> {
		// `json` sets `Content-Type: application/json` alongside the body.
		let request = self
			.client
			.post(self.endpoint.clone())
			.json(request)
			.build()?;
		Ok(request)
	}
}

impl SearchBackend for HttpBackend {
	fn search(&self, request: &SearchRequest) -> Result<Value, SearchError> {
		let http_request = self.build_request(request)?;
		log::debug!(
			"POST {} query={:?}",
			http_request.url(),
			request.query
		);

		let response = self.client.execute(http_request)?;
		let status = response.status();
		if !status.is_success() {
			return Err(SearchError::Status { status });
		}

		let body = response.bytes()?;
		Ok(serde_json::from_slice(&body)?)
	}
}

#[cfg(test)]
mod tests {
	use std::io::{Read, Write};
	use std::net::{TcpListener, TcpStream};
	use std::thread::{self, JoinHandle};
	use std::time::Duration;

	use reqwest::Method;
	use reqwest::StatusCode;
	use reqwest::header::CONTENT_TYPE;
	use serde_json::json;

	use super::*;
	use crate::search::DEFAULT_ENDPOINT;

	/// Accept a single connection, answer it with the given status and body and
	/// hand back the raw request text.
	fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
		serve_after(Duration::ZERO, status, body)
	}

	/// Like [`serve_once`], but holds the response back for `delay`.
	fn serve_after(
		delay: Duration,
		status: &'static str,
		body: &'static str,
	) -> (Url, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		let handle = thread::spawn(move || {
			let (mut stream, _) = listener.accept().unwrap();
			let request = read_request(&mut stream);
			thread::sleep(delay);
			let response = format!(
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			stream.write_all(response.as_bytes()).unwrap();
			request
		});
		let url = Url::parse(&format!("http://{addr}/search")).unwrap();
		(url, handle)
	}

	fn read_request(stream: &mut TcpStream) -> String {
		let mut buf = Vec::new();
		let mut chunk = [0u8; 1024];
		loop {
			let read = stream.read(&mut chunk).unwrap();
			if read == 0 {
				break;
			}
			buf.extend_from_slice(&chunk[..read]);
			if let Some(end) = buf.windows(4).position(|window| window == b"\r\n\r\n") {
				let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
				let length = head
					.lines()
					.find_map(|line| line.strip_prefix("content-length:"))
					.and_then(|value| value.trim().parse::<usize>().ok())
					.unwrap_or(0);
				if buf.len() >= end + 4 + length {
					break;
				}
			}
		}
		String::from_utf8_lossy(&buf).into_owned()
	}

	fn backend_for(url: Url) -> HttpBackend {
		HttpBackend::new(url).expect("client")
	}

	#[test]
	fn request_is_a_json_post_to_the_endpoint() {
		let backend = backend_for(Url::parse(DEFAULT_ENDPOINT).unwrap());
		let request = backend
			.build_request(&SearchRequest::new("foo"))
			.expect("build request");

		assert_eq!(request.method(), &Method::POST);
		assert_eq!(request.url().as_str(), "http://localhost:8000/search");
		assert_eq!(
			request
				.headers()
				.get(CONTENT_TYPE)
				.and_then(|value| value.to_str().ok()),
			Some("application/json")
		);
		let body = request.body().and_then(|body| body.as_bytes());
		assert_eq!(body, Some(br#"{"query":"foo"}"#.as_slice()));
	}

	#[test]
	fn empty_query_still_builds_a_request() {
		let backend = backend_for(Url::parse(DEFAULT_ENDPOINT).unwrap());
		let request = backend
			.build_request(&SearchRequest::new(""))
			.expect("build request");
		let body = request.body().and_then(|body| body.as_bytes());
		assert_eq!(body, Some(br#"{"query":""}"#.as_slice()));
	}

	#[test]
	fn successful_response_is_returned_verbatim() {
		let (url, server) = serve_once(
			"200 OK",
			r#"[{"title":"A","url":"http://a","score":1.5},{"title":"B","url":"http://b"}]"#,
		);
		let value = backend_for(url)
			.search(&SearchRequest::new("foo"))
			.expect("search");

		assert_eq!(
			value,
			json!([
				{"title": "A", "url": "http://a", "score": 1.5},
				{"title": "B", "url": "http://b"},
			])
		);

		let raw = server.join().unwrap();
		assert!(raw.starts_with("POST /search HTTP/1.1"));
		assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
		assert!(raw.ends_with(r#"{"query":"foo"}"#));
	}

	#[test]
	fn slow_responses_are_awaited_past_the_client_default_timeout() {
		let (url, server) = serve_after(
			Duration::from_secs(31),
			"200 OK",
			r#"[{"title":"A","url":"http://a"}]"#,
		);
		let value = backend_for(url)
			.search(&SearchRequest::new("slow"))
			.expect("slow search succeeds");
		server.join().unwrap();

		assert_eq!(value, json!([{"title": "A", "url": "http://a"}]));
	}

	#[test]
	fn non_success_status_is_reported() {
		let (url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);
		let err = backend_for(url)
			.search(&SearchRequest::new("foo"))
			.unwrap_err();
		server.join().unwrap();

		match err {
			SearchError::Status { status } => {
				assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
			}
			other => panic!("expected status error, got {other:?}"),
		}
	}

	#[test]
	fn malformed_body_is_a_decode_error() {
		let (url, server) = serve_once("200 OK", "not json");
		let err = backend_for(url)
			.search(&SearchRequest::new("foo"))
			.unwrap_err();
		server.join().unwrap();

		assert!(matches!(err, SearchError::Decode(_)));
	}

	#[test]
	fn refused_connection_is_a_transport_error() {
		let addr = {
			let listener = TcpListener::bind("127.0.0.1:0").unwrap();
			listener.local_addr().unwrap()
		};
		let url = Url::parse(&format!("http://{addr}/search")).unwrap();

		let err = backend_for(url)
			.search(&SearchRequest::new("foo"))
			.unwrap_err();

		assert!(matches!(err, SearchError::Transport(_)));
	}
}
