use std::fs::OpenOptions;
use std::io::Write;
use chrono::Utc;

pub fn log_request(
    method: &str,
    path: &str,
    status: u16,
) {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    let log_entry = format_entry(&timestamp.to_string(), method, path, status);

    // Use /app/requests.log in Docker, ./requests.log locally
    let log_path = std::env::var("LOG_PATH")
        .unwrap_or_else(|_| "./requests.log".to_string());

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(log_entry.as_bytes());
    } else {
        eprintln!("Failed to write to log file: {}", log_path);
    }
}

fn format_entry(timestamp: &str, method: &str, path: &str, status: u16) -> String {
    format!(
        "{} | {:6} {:24} | {}\n",
        timestamp, method, path, status
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_carries_method_path_and_status() {
        let entry = format_entry("2026-01-01 00:00:00", "GET", "/api/greet", 200);
        assert!(entry.starts_with("2026-01-01 00:00:00 | GET"));
        assert!(entry.contains("/api/greet"));
        assert!(entry.trim_end().ends_with("200"));
        assert!(entry.ends_with('\n'));
    }
}
