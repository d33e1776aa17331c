use crate::types::StorageContext;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

#[derive(Debug, PartialEq)]
pub enum Error {
    UploadFailed,
    DeleteFailed,
    NotFound,
}

#[derive(Serialize, Clone, Debug, Deserialize)]
pub struct UploadedMedia {
    pub public_id: String,
    pub url: String,
    pub timestamp: i64,
}

// Generated ids are bare ULIDs; anything else never touches the filesystem.
fn is_valid_public_id(id: &str) -> bool {
    id.len() == 26 && id.chars().all(|c| c.is_ascii_alphanumeric())
}

pub async fn upload_file(cfg: StorageContext, contents: Vec<u8>) -> Result<UploadedMedia, Error> {
    let public_id = Ulid::new().to_string();
    let file_path = cfg.upload_dir.join(&public_id);
    let timestamp = chrono::Utc::now().timestamp();

    tokio::fs::write(&file_path, contents).await.map_err(|err| {
        tracing::error!(
            "Failed to save uploaded file {}: {:?}",
            file_path.display(),
            err
        );
        Error::UploadFailed
    })?;

    Ok(UploadedMedia {
        url: format!("{}/{}", cfg.public_url, public_id),
        public_id,
        timestamp,
    })
}

pub async fn upload_files(
    cfg: StorageContext,
    contents: Vec<Vec<u8>>,
) -> Result<Vec<UploadedMedia>, Error> {
    let mut media = Vec::with_capacity(contents.len());

    for buf in contents {
        media.push(upload_file(cfg.clone(), buf).await?);
    }

    Ok(media)
}

pub async fn read_file(cfg: StorageContext, public_id: &str) -> Result<Vec<u8>, Error> {
    if !is_valid_public_id(public_id) {
        return Err(Error::NotFound);
    }

    tokio::fs::read(cfg.upload_dir.join(public_id))
        .await
        .map_err(|err| {
            tracing::debug!("Failed to read uploaded file {}: {:?}", public_id, err);
            Error::NotFound
        })
}

pub async fn delete_file(cfg: StorageContext, public_id: &str) -> Result<(), Error> {
    if !is_valid_public_id(public_id) {
        return Err(Error::NotFound);
    }

    match tokio::fs::remove_file(cfg.upload_dir.join(public_id)).await {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(Error::NotFound),
        Err(err) => {
            tracing::error!("Failed to delete uploaded file {}: {:?}", public_id, err);
            Err(Error::DeleteFailed)
        }
    }
}
