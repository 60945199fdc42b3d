use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::ActionsRepositoryError;

/// Reads a JSON array of records from `path`.
///
/// # Errors
///
/// Returns `ActionsRepositoryError::Io` if the file cannot be read and
/// `ActionsRepositoryError::Parse` if its content is not an array of `T`.
pub async fn read_records<T>(path: &Path) -> Result<Vec<T>, ActionsRepositoryError>
where
    T: DeserializeOwned,
{
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ActionsRepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let records: Vec<T> =
        serde_json::from_slice(&bytes).map_err(|source| ActionsRepositoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), count = records.len(), "Read records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use user_actions_shared::types::User;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_read_records() {
        let file = write_temp(
            r#"[{"id":1,"name":"Tom","createdAt":"2021-07-04T12:47:09Z"},
                {"id":2,"name":"Alice","createdAt":"2021-07-04T13:47:09Z"}]"#,
        );

        let users: Vec<User> = read_records(file.path()).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Alice");
    }

    #[tokio::test]
    async fn test_read_empty_array() {
        let file = write_temp("[]");
        let users: Vec<User> = read_records(file.path()).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let result: Result<Vec<User>, _> = read_records(&path).await;
        match result {
            Err(ActionsRepositoryError::Io { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_invalid_json() {
        let file = write_temp("invalid json content");
        let result: Result<Vec<User>, _> = read_records(file.path()).await;
        assert!(matches!(result, Err(ActionsRepositoryError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_read_wrong_record_shape() {
        let file = write_temp(r#"[{"id":"one","name":"Tom"}]"#);
        let result: Result<Vec<User>, _> = read_records(file.path()).await;
        assert!(matches!(result, Err(ActionsRepositoryError::Parse { .. })));
    }
}
