use crate::domain::model::Setting;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

pub trait ConfigProvider {
    fn template_dir(&self) -> &Path;
    fn output_dir(&self) -> &Path;
    fn setting(&self) -> &Setting;
    fn dry_run(&self) -> bool;
}
