use super::types::{request, response};
use crate::{modules::storage, types::Context};
use axum_typed_multipart::FieldData;
use std::{io::Read, sync::Arc};
use tempfile::NamedTempFile;

fn read_contents(file: &mut FieldData<NamedTempFile>) -> Result<Vec<u8>, response::Error> {
    let mut buf: Vec<u8> = vec![];

    file.contents.read_to_end(&mut buf).map_err(|err| {
        tracing::error!("Failed to read the uploaded file {:?}", err);
        response::Error::FailedToUploadMedia
    })?;

    Ok(buf)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let file_names = payload
        .file
        .iter()
        .map(|file| file.metadata.file_name.as_deref().unwrap_or(""))
        .collect::<Vec<_>>();
    tracing::debug!(
        "Received {} file part(s): {:?}",
        payload.file.len(),
        file_names
    );

    let files = request::Files::classify(payload.file).ok_or(response::Error::NoFileAttached)?;

    match files {
        request::Files::Single(mut file) => {
            let buf = read_contents(&mut file)?;

            storage::upload_file(ctx.storage.clone(), buf)
                .await
                .map_err(|_| response::Error::FailedToUploadMedia)
                .map(response::Success::UploadedOne)
        }
        request::Files::Multiple(files) => {
            let mut contents = Vec::with_capacity(files.len());
            for mut file in files {
                contents.push(read_contents(&mut file)?);
            }

            storage::upload_files(ctx.storage.clone(), contents)
                .await
                .map_err(|_| response::Error::FailedToUploadMedia)
                .map(response::Success::UploadedMany)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppContext, StorageContext};
    use axum_typed_multipart::FieldMetadata;
    use std::io::{Seek, SeekFrom, Write};

    fn test_context(dir: &tempfile::TempDir) -> Arc<Context> {
        Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                port: 8000,
                url: "http://127.0.0.1:8000".to_string(),
            },
            storage: StorageContext {
                upload_dir: dir.path().to_path_buf(),
                public_url: "http://127.0.0.1:8000/api/media".to_string(),
            },
        })
    }

    fn part(file_name: &str, contents: &[u8]) -> FieldData<NamedTempFile> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.as_file_mut().seek(SeekFrom::Start(0)).unwrap();

        FieldData {
            metadata: FieldMetadata {
                name: Some("file".to_string()),
                file_name: Some(file_name.to_string()),
                ..Default::default()
            },
            contents: file,
        }
    }

    #[tokio::test]
    async fn one_part_uploads_a_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(&dir);
        let payload = request::Payload {
            file: vec![part("a.txt", b"hello")],
        };

        match service(ctx, payload).await {
            Ok(response::Success::UploadedOne(media)) => {
                let stored = std::fs::read(dir.path().join(&media.public_id)).unwrap();
                assert_eq!(stored, b"hello");
            }
            _ => panic!("expected a single upload"),
        }
    }

    #[tokio::test]
    async fn repeated_parts_upload_a_batch_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(&dir);
        let payload = request::Payload {
            file: vec![part("a.txt", b"one"), part("b.txt", b"two")],
        };

        match service(ctx, payload).await {
            Ok(response::Success::UploadedMany(media)) => {
                assert_eq!(media.len(), 2);
                for (item, contents) in media.iter().zip([&b"one"[..], b"two"]) {
                    let stored = std::fs::read(dir.path().join(&item.public_id)).unwrap();
                    assert_eq!(stored, contents);
                }
            }
            _ => panic!("expected a batch upload"),
        }
    }

    #[tokio::test]
    async fn no_parts_is_rejected_without_touching_storage() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(&dir);
        let payload = request::Payload { file: vec![] };

        match service(ctx, payload).await {
            Err(response::Error::NoFileAttached) => {}
            _ => panic!("expected the missing file error"),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
