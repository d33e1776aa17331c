use super::types::{request, response};
use crate::{modules::storage, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    storage::delete_file(ctx.storage.clone(), payload.id.as_str())
        .await
        .map_err(|err| match err {
            storage::Error::NotFound => response::Error::MediaNotFound,
            _ => response::Error::FailedToDeleteMedia,
        })
        .map(|_| response::Success::MediaDeleted)
}
