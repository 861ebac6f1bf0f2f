use std::path::Path;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::process::Command;
use tokio::sync::Mutex;

use crate::domain::models::PrintWindow;

fn default_opener() -> Option<Vec<String>> {
    let opener: &[&str] = if cfg!(target_os = "macos") {
        &["open"]
    } else if cfg!(target_os = "windows") {
        &["cmd", "/C", "start", ""]
    } else if cfg!(unix) {
        &["xdg-open"]
    } else {
        return None;
    };

    return Some(opener.iter().map(|e| return e.to_string()).collect());
}

/// Prints by writing the document to an HTML file and opening it with the
/// system viewer, where the user's print dialog takes over.
pub struct FilePrintWindow {
    dir: PathBuf,
    current: Mutex<Option<PathBuf>>,
    opener: Option<Vec<String>>,
}

impl FilePrintWindow {
    pub fn new(dir: PathBuf) -> FilePrintWindow {
        return FilePrintWindow {
            dir,
            current: Mutex::new(None),
            opener: default_opener(),
        };
    }

    /// Replace the viewer command. `None` only writes the file.
    pub fn with_opener(mut self, opener: Option<Vec<String>>) -> FilePrintWindow {
        self.opener = opener;
        return self;
    }

    pub fn dir(&self) -> &Path {
        return &self.dir;
    }

    pub async fn current_document(&self) -> Option<PathBuf> {
        return self.current.lock().await.clone();
    }
}

#[async_trait]
impl PrintWindow for FilePrintWindow {
    async fn open(&self, document: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let file_name = format!(
            "devotional-{}.html",
            chrono::Local::now().format("%Y%m%d-%H%M%S%3f")
        );
        let path = self.dir.join(file_name);
        fs::write(&path, document).await?;
        tracing::debug!(path = %path.display(), "print document written");

        *self.current.lock().await = Some(path);

        return Ok(());
    }

    async fn print(&self) -> Result<()> {
        let path = match self.current.lock().await.clone() {
            Some(path) => path,
            None => bail!("No document is open for printing"),
        };

        let opener = match &self.opener {
            Some(opener) if !opener.is_empty() => opener,
            _ => {
                tracing::info!(path = %path.display(), "printable devotional saved");
                return Ok(());
            }
        };

        let status = Command::new(&opener[0])
            .args(&opener[1..])
            .arg(&path)
            .status()
            .await?;
        if !status.success() {
            bail!(format!("{} exited with {status}", opener[0]));
        }

        return Ok(());
    }

    async fn close(&self) -> Result<()> {
        *self.current.lock().await = None;
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_writes_document() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let window = FilePrintWindow::new(dir.path().join("prints")).with_opener(None);

        window.open("<html>hello</html>").await?;

        let path = window.current_document().await.unwrap();
        assert!(path.starts_with(window.dir()));
        assert_eq!(std::fs::read_to_string(path)?, "<html>hello</html>");

        return Ok(());
    }

    #[tokio::test]
    async fn test_print_without_open_fails() {
        let dir = tempfile::tempdir().unwrap();
        let window = FilePrintWindow::new(dir.path().to_path_buf()).with_opener(None);

        assert!(window.print().await.is_err());
    }

    #[tokio::test]
    async fn test_close_forgets_document_but_keeps_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let window = FilePrintWindow::new(dir.path().to_path_buf()).with_opener(None);

        window.open("<html></html>").await?;
        window.print().await?;
        let path = window.current_document().await.unwrap();
        window.close().await?;

        assert!(window.current_document().await.is_none());
        assert!(path.exists());

        return Ok(());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_print_reports_failing_viewer() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let window = FilePrintWindow::new(dir.path().to_path_buf())
            .with_opener(Some(vec!["false".to_string()]));

        window.open("<html></html>").await?;

        assert!(window.print().await.is_err());

        return Ok(());
    }
}
