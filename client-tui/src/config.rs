//! Configuration for the fenseek terminal client.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable; the server URL can additionally be
//! set with a command-line flag.

/// Default backend base URL.
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Default directory for debug log files.
const DEFAULT_LOG_DIR: &str = "logs";

/// Get the backend base URL.
///
/// Priority:
/// 1. `FENSEEK_SERVER_URL` env variable if set
/// 2. `http://localhost:8080` as fallback
pub fn server_url() -> String {
    if let Ok(url) = std::env::var("FENSEEK_SERVER_URL") {
        return url;
    }
    DEFAULT_SERVER_URL.to_string()
}

/// Get the directory where log files are written.
///
/// Priority:
/// 1. `FENSEEK_LOG_DIR` env variable if set
/// 2. `logs` as fallback
pub fn log_dir() -> String {
    if let Ok(dir) = std::env::var("FENSEEK_LOG_DIR") {
        return dir;
    }
    DEFAULT_LOG_DIR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_url() {
        let url = server_url();
        match std::env::var("FENSEEK_SERVER_URL") {
            Ok(val) => assert_eq!(url, val),
            Err(_) => assert_eq!(url, DEFAULT_SERVER_URL),
        }
    }

    #[test]
    fn test_log_dir() {
        let dir = log_dir();
        match std::env::var("FENSEEK_LOG_DIR") {
            Ok(val) => assert_eq!(dir, val),
            Err(_) => assert_eq!(dir, DEFAULT_LOG_DIR),
        }
    }
}
