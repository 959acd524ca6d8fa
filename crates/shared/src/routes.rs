//! HTTP paths, relative to the API base URL

/// Base path the service is mounted under when served from the same origin
pub const DEFAULT_API_BASE_PATH: &str = "/api/v1";

pub const GENERATE_MYTH_PATH: &str = "/generate-myth";

pub const HEALTH_PATH: &str = "/health";

/// Join a base URL and a path without doubling or dropping the slash
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_normalizes_slashes() {
        assert_eq!(join("/api/v1", GENERATE_MYTH_PATH), "/api/v1/generate-myth");
        assert_eq!(
            join("http://localhost:8000/api/v1/", HEALTH_PATH),
            "http://localhost:8000/api/v1/health"
        );
        assert_eq!(join("/api/v1", "health"), "/api/v1/health");
    }
}
