mod file;

use std::path::PathBuf;

pub use file::FilePrintWindow;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::PrintWindowBox;

pub struct PrintWindowManager {}

impl PrintWindowManager {
    /// A print window writing into the configured print directory and
    /// handing the page to the platform's default viewer.
    pub fn get() -> PrintWindowBox {
        let dir = PathBuf::from(Config::get(ConfigKey::PrintDir));
        return Box::new(FilePrintWindow::new(dir));
    }
}
