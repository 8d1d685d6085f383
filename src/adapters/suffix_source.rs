use crate::core::public_suffix::PublicSuffixList;
use crate::domain::ports::SuffixListSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// The list compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSuffixList;

#[async_trait]
impl SuffixListSource for EmbeddedSuffixList {
    async fn load(&self) -> Result<PublicSuffixList> {
        PublicSuffixList::embedded()
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// A `public_suffix_list.dat` file on disk.
#[derive(Debug, Clone)]
pub struct FileSuffixList {
    path: PathBuf,
}

impl FileSuffixList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SuffixListSource for FileSuffixList {
    async fn load(&self) -> Result<PublicSuffixList> {
        PublicSuffixList::load(&self.path).await
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
