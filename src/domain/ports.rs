use crate::core::public_suffix::PublicSuffixList;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where a public suffix list comes from.
#[async_trait]
pub trait SuffixListSource: Send + Sync {
    async fn load(&self) -> Result<PublicSuffixList>;
    fn describe(&self) -> String;
}
