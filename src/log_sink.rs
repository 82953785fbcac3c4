use crate::domain::Family;
use chrono::Local;
use std::fmt::Debug;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, warn};

pub const GENERAL_LOG_FILE: &str = "main_errors.log";

/// Append-only destination for error lines.
pub trait LogSink: Debug + Send + Sync {
    fn error(&self, message: &str);
}

/// Hands out the error sink of a family, plus the general sink for run level failures.
pub trait LogSinks: Debug + Send + Sync {
    fn family(&self, family: &Family) -> Arc<dyn LogSink>;

    fn general(&self) -> Arc<dyn LogSink>;
}

#[derive(Debug)]
pub struct FileLogSink {
    path: PathBuf,
}

impl FileLogSink {
    pub fn new(path: PathBuf) -> Self {
        FileLogSink { path }
    }

    fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}:ERROR:{}", Local::now().format("%Y-%m-%d %H:%M:%S,%3f"), message)
    }
}

impl LogSink for FileLogSink {
    fn error(&self, message: &str) {
        error!(sink = %self.path.display(), "❌ {}", message);

        if let Err(e) = self.append(message) {
            warn!("⚠️ Unable to write to '{}': {}", self.path.display(), e);
        }
    }
}

/// Writes `{family}_errors.log` and `main_errors.log` files into one directory.
#[derive(Debug)]
pub struct FileLogSinks {
    directory: PathBuf,
    general: Arc<dyn LogSink>,
}

impl FileLogSinks {
    pub fn new(directory: &Path) -> Self {
        FileLogSinks {
            directory: directory.to_path_buf(),
            general: Arc::new(FileLogSink::new(directory.join(GENERAL_LOG_FILE))),
        }
    }
}

impl LogSinks for FileLogSinks {
    fn family(&self, family: &Family) -> Arc<dyn LogSink> {
        Arc::new(FileLogSink::new(self.directory.join(family_log_file(family))))
    }

    fn general(&self) -> Arc<dyn LogSink> {
        self.general.clone()
    }
}

// Family names come from the inventory, keep them inside the log directory.
fn family_log_file(family: &Family) -> String {
    let key: String = family
        .key()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    format!("{}_errors.log", key)
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct MemoryLogSink {
        lines: Mutex<Vec<String>>,
    }

    impl MemoryLogSink {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl LogSink for MemoryLogSink {
        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    #[derive(Debug, Default)]
    pub struct MemoryLogSinks {
        families: Mutex<HashMap<String, Arc<MemoryLogSink>>>,
        general: Arc<MemoryLogSink>,
    }

    impl MemoryLogSinks {
        pub fn family_lines(&self, family: &Family) -> Vec<String> {
            self.families.lock().unwrap().get(&family.key()).map(|sink| sink.lines()).unwrap_or_default()
        }

        pub fn general_lines(&self) -> Vec<String> {
            self.general.lines()
        }
    }

    impl LogSinks for MemoryLogSinks {
        fn family(&self, family: &Family) -> Arc<dyn LogSink> {
            self.families.lock().unwrap().entry(family.key()).or_default().clone()
        }

        fn general(&self) -> Arc<dyn LogSink> {
            self.general.clone()
        }
    }
}
