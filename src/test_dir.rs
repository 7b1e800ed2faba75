use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Scratch directory under the system temp dir, removed on drop.
pub struct TestDir {
  path: PathBuf,
}

impl TestDir {
  pub fn new() -> Self {
    let n = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .expect("clock")
      .as_nanos();
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("stager_test_{}_{n}_{count}", std::process::id()));
    std::fs::create_dir_all(&path).expect("create test dir");
    Self { path }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn write_text(&self, relative: &str, txt: &str) {
    self.write_bytes(relative, txt.as_bytes())
  }

  pub fn write_bytes(&self, relative: &str, bytes: &[u8]) {
    let path = self.path.join(relative);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, bytes).expect("write file");
  }
}

impl Drop for TestDir {
  fn drop(&mut self) {
    let _ = std::fs::remove_dir_all(&self.path);
  }
}
