use std::path::{Path, PathBuf};

use scoring_domain::{AudioArtifact, DomainError};
use tempfile::TempDir;
use uuid::Uuid;

const WORKSPACE_PREFIX: &str = "voice-score-";
const FALLBACK_EXTENSION: &str = "bin";
const MAX_EXTENSION_LEN: usize = 8;

/// Creates one private directory per request, optionally under a configured root.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceFactory {
    root: Option<PathBuf>,
}

impl WorkspaceFactory {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn create(&self) -> Result<RequestWorkspace, DomainError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKSPACE_PREFIX);
        let dir = match &self.root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|err| DomainError::workspace(format!("failed to create request directory: {err}")))?;

        Ok(RequestWorkspace {
            id: Uuid::new_v4(),
            dir,
        })
    }
}

/// Owns every artifact of one request. The directory and its contents are removed on drop.
#[derive(Debug)]
pub struct RequestWorkspace {
    id: Uuid,
    dir: TempDir,
}

impl RequestWorkspace {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn upload_artifact(&self, file_name: Option<&str>) -> AudioArtifact {
        let extension = upload_extension(file_name);
        AudioArtifact::new(self.path().join(format!("upload-{}.{extension}", self.id)))
    }

    pub fn converted_artifact(&self) -> AudioArtifact {
        AudioArtifact::new(self.path().join(format!("audio-{}.wav", self.id)))
    }

    pub async fn store_upload(
        &self,
        bytes: &[u8],
        file_name: Option<&str>,
    ) -> Result<AudioArtifact, DomainError> {
        let artifact = self.upload_artifact(file_name);
        tokio::fs::write(artifact.path(), bytes)
            .await
            .map_err(|err| DomainError::workspace(format!("failed to store upload: {err}")))?;
        Ok(artifact)
    }

    pub fn close(self) -> Result<(), DomainError> {
        self.dir
            .close()
            .map_err(|err| DomainError::workspace(format!("failed to remove request directory: {err}")))
    }
}

fn upload_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::{upload_extension, WorkspaceFactory};

    #[test]
    fn extension_is_kept_when_safe() {
        assert_eq!(upload_extension(Some("clip.MP3")), "mp3");
        assert_eq!(upload_extension(Some("dir/voice.note.webm")), "webm");
    }

    #[test]
    fn extension_falls_back_when_missing_or_odd() {
        assert_eq!(upload_extension(None), "bin");
        assert_eq!(upload_extension(Some("noext")), "bin");
        assert_eq!(upload_extension(Some("x.w@v")), "bin");
        assert_eq!(upload_extension(Some("x.averyverylongext")), "bin");
    }

    #[tokio::test]
    async fn workspaces_are_distinct_and_removed_on_close() {
        let root = tempfile::tempdir().expect("root dir");
        let factory = WorkspaceFactory::new(Some(root.path().to_path_buf()));

        let first = factory.create().expect("first workspace");
        let second = factory.create().expect("second workspace");
        assert_ne!(first.path(), second.path());
        assert_ne!(first.converted_artifact(), second.converted_artifact());

        let upload = first
            .store_upload(b"RIFF", Some("clip.wav"))
            .await
            .expect("upload stored");
        assert!(upload.path().is_file());

        let first_path = first.path().to_path_buf();
        first.close().expect("closes");
        assert!(!first_path.exists());

        let second_path = second.path().to_path_buf();
        drop(second);
        assert!(!second_path.exists());
    }
}
