use crate::domain::model::SectionSizes;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where section sizes of a firmware image come from.
#[async_trait]
pub trait SectionSource: Send + Sync {
    async fn sections(&self, elf: &str) -> Result<SectionSizes>;
}
