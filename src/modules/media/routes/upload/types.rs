pub mod request {
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Payload {
        #[form_data(limit = "10MiB")]
        pub file: Vec<FieldData<NamedTempFile>>,
    }

    pub enum Files {
        Single(FieldData<NamedTempFile>),
        Multiple(Vec<FieldData<NamedTempFile>>),
    }

    impl Files {
        /// A lone `file` part is a single upload, repeated parts are a
        /// batch. Zero parts means the field was never attached.
        pub fn classify(mut parts: Vec<FieldData<NamedTempFile>>) -> Option<Self> {
            match parts.len() {
                0 => None,
                1 => Some(Self::Single(parts.remove(0))),
                _ => Some(Self::Multiple(parts)),
            }
        }
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::storage::UploadedMedia;

    pub enum Success {
        UploadedOne(UploadedMedia),
        UploadedMany(Vec<UploadedMedia>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UploadedOne(media) => (
                    StatusCode::OK,
                    Json(json!({ "message": "File uploaded", "media": media })),
                )
                    .into_response(),
                Self::UploadedMany(media) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Files uploaded", "media": media })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        NoFileAttached,
        FailedToUploadMedia,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoFileAttached => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "No file attached" })),
                )
                    .into_response(),
                Self::FailedToUploadMedia => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload media" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
