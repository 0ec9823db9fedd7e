use anyhow::{Context, Result};
use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tokio::fs::{read_to_string, write};
use tracing::debug;

use crate::PomDocuments;

pub const POM_FILE_NAME: &str = "pom.xml";

/// Find every `pom.xml` below `root`, sorted by path.
///
/// `.gitignore` rules are honoured inside git checkouts. `ignore_patterns` are glob patterns
/// matched against the path relative to `root` (e.g. `legacy/**`).
///
/// # Errors
/// Returns error if a pattern is invalid or the directory cannot be walked.
pub fn find_pom_files(root: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = ignore_patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).context(format!("Invalid ignore pattern - {pattern}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut pom_files = Vec::new();
    for entry in WalkBuilder::new(root).hidden(false).parents(false).build() {
        let entry = entry.context(format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_some_and(|file_type| file_type.is_file())
            || entry.file_name() != POM_FILE_NAME
        {
            continue;
        }
        let path = entry.into_path();
        let relative_path = path.strip_prefix(root).unwrap_or(&path);
        if patterns
            .iter()
            .any(|pattern| pattern.matches_path(relative_path))
        {
            debug!("Ignoring {}", relative_path.display());
            continue;
        }
        pom_files.push(path);
    }
    pom_files.sort();
    Ok(pom_files)
}

/// Read POM files into an ordered path to content map.
///
/// # Errors
/// Returns error if any file cannot be read or is not valid UTF-8.
pub async fn load_pom_documents(paths: &[PathBuf]) -> Result<PomDocuments> {
    let mut documents = PomDocuments::new();
    for path in paths {
        let content = read_to_string(path)
            .await
            .context(format!("Failed to read POM file - {}", path.display()))?;
        documents.insert(path.clone(), content);
    }
    Ok(documents)
}

/// Write changed POM files back to disk.
///
/// # Errors
/// Returns error if any file cannot be written.
pub async fn write_pom_documents(documents: &PomDocuments) -> Result<()> {
    for (path, content) in documents {
        write(path, content)
            .await
            .context(format!("Failed to write POM file - {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_pom_files_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pom.xml"), "<project/>").unwrap();

        let result = find_pom_files(temp_dir.path(), &[]).unwrap();
        assert_eq!(result, vec![temp_dir.path().join("pom.xml")]);
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_find_pom_files_multi_module() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();
        fs::write(temp_path.join("pom.xml"), "<project/>").unwrap();
        fs::create_dir_all(temp_path.join("child-module")).unwrap();
        fs::write(temp_path.join("child-module/pom.xml"), "<project/>").unwrap();
        fs::write(temp_path.join("child-module/build.gradle"), "").unwrap();
        fs::create_dir_all(temp_path.join("bom")).unwrap();
        fs::write(temp_path.join("bom/pom.xml"), "<project/>").unwrap();

        let result = find_pom_files(temp_path, &[]).unwrap();
        assert_eq!(
            result,
            vec![
                temp_path.join("bom/pom.xml"),
                temp_path.join("child-module/pom.xml"),
                temp_path.join("pom.xml"),
            ]
        );
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_find_pom_files_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_pom_files(temp_dir.path(), &[]).unwrap();
        assert!(result.is_empty());
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_find_pom_files_ignore_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();
        fs::write(temp_path.join("pom.xml"), "<project/>").unwrap();
        fs::create_dir_all(temp_path.join("legacy/module")).unwrap();
        fs::write(temp_path.join("legacy/module/pom.xml"), "<project/>").unwrap();

        let result = find_pom_files(temp_path, &["legacy/*".to_string()]).unwrap();
        assert_eq!(result, vec![temp_path.join("pom.xml")]);
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_find_pom_files_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_pom_files(temp_dir.path(), &["[".to_string()]);
        assert!(result.is_err());
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_and_write_pom_documents() {
        let temp_dir = TempDir::new().unwrap();
        let pom = temp_dir.path().join("pom.xml");
        fs::write(&pom, "<project><version>1.0.0</version></project>").unwrap();

        let mut documents = load_pom_documents(&[pom.clone()]).await.unwrap();
        assert_eq!(
            documents[&pom],
            "<project><version>1.0.0</version></project>"
        );

        documents.insert(pom.clone(), "<project><version>2.0.0</version></project>".to_string());
        write_pom_documents(&documents).await.unwrap();
        assert_eq!(
            fs::read_to_string(&pom).unwrap(),
            "<project><version>2.0.0</version></project>"
        );
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_pom_documents_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let pom = temp_dir.path().join("pom.xml");
        fs::write(&pom, b"<\xff\xfe>").unwrap();

        let result = load_pom_documents(&[pom]).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read POM file")
        );
        temp_dir.close().unwrap();
    }
}
