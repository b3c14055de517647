use anyhow::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn append(&self, message: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{}: {}\n", timestamp, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        let path = PathBuf::from(format!("/tmp/pricelog_test_{}", name));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_append_creates_file() {
        let path = scratch("log_create.txt");
        let log = ErrorLog::new(&path);
        log.append("something went wrong").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(": something went wrong"));
        assert!(content.ends_with('\n'));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_is_append_only() {
        let path = scratch("log_append.txt");
        let log = ErrorLog::new(&path);
        log.append("first").unwrap();
        log.append("second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));

        fs::remove_file(&path).unwrap();
    }
}
