use super::types::{request, response};
use crate::{modules::storage, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    storage::read_file(ctx.storage.clone(), payload.id.as_str())
        .await
        .map_err(|_| response::Error::MediaNotFound)
        .map(response::Success::Media)
}
