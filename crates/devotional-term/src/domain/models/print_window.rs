use anyhow::Result;
use async_trait::async_trait;

/// A separate viewing context a printable document is shown and printed in.
#[async_trait]
pub trait PrintWindow: Send + Sync {
    async fn open(&self, document: &str) -> Result<()>;
    async fn print(&self) -> Result<()>;
    async fn close(&self) -> Result<()>;
}

pub type PrintWindowBox = Box<dyn PrintWindow>;
