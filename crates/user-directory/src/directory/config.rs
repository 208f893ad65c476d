//! Configuration for [`HttpDirectory`](super::HttpDirectory).

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Where the directory lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Service root; `/users` is appended.
    pub base_url: String,
    /// Total time allowed for one request.
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub latency: Latency,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            latency: Latency::default(),
        }
    }
}

impl DirectoryConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Artificial delay inserted before each call, so loading states stay visible in demos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub delete: Duration,
    pub create: Duration,
}

impl Latency {
    /// Delays that make every spinner observable by a human.
    pub fn demo() -> Self {
        Self {
            list: Duration::from_millis(1500),
            delete: Duration::from_millis(800),
            create: Duration::from_millis(1000),
        }
    }
}
