use crate::core::size_report::parse_sections;
use crate::core::{SectionSizes, SectionSource, Storage};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::path::Path;

pub const DEFAULT_SIZE_TOOL: &str = "size";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

/// Runs `<program> -A <elf>` (GNU binutils `size`) and parses its output.
#[derive(Debug, Clone)]
pub struct SizeCommand {
    program: String,
}

impl SizeCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SizeCommand {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE_TOOL)
    }
}

#[async_trait]
impl SectionSource for SizeCommand {
    async fn sections(&self, elf: &str) -> Result<SectionSizes> {
        tracing::debug!("Running {} -A {}", self.program, elf);
        let output = tokio::process::Command::new(&self.program)
            .arg("-A")
            .arg(elf)
            .output()
            .await
            .map_err(|e| DemoError::ToolError {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DemoError::ToolError {
                program: self.program.clone(),
                message: format!("exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(parse_sections(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Section source backed by already captured `size -A` text, as read by
/// `demo size --size-output FILE`.
#[derive(Debug, Clone)]
pub struct CapturedSizeOutput {
    text: String,
}

impl CapturedSizeOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl SectionSource for CapturedSizeOutput {
    async fn sections(&self, _elf: &str) -> Result<SectionSizes> {
        Ok(parse_sections(&self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_output_source() {
        let source = CapturedSizeOutput::new(".text 100 0\n.data 20 0\n");
        let sections = tokio_test::block_on(source.sections("ignored.elf")).unwrap();
        assert_eq!(sections.get(".text"), Some(&100));
        assert_eq!(sections.get(".data"), Some(&20));
    }

    #[test]
    fn test_missing_size_tool_is_tool_error() {
        let source = SizeCommand::new("definitely-not-a-real-size-tool");
        let result = tokio_test::block_on(source.sections("firmware.elf"));
        assert!(matches!(result, Err(DemoError::ToolError { .. })));
    }

    #[tokio::test]
    async fn test_local_storage_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        storage.write_file("nested/out.json", b"{}").await.unwrap();
        let data = storage.read_file("nested/out.json").await.unwrap();
        assert_eq!(data, b"{}");
    }
}
