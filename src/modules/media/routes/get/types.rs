pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{
        extract::Json,
        http::{header, StatusCode},
        response::IntoResponse,
    };
    use serde_json::json;

    pub enum Success {
        Media(Vec<u8>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Media(contents) => (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/octet-stream")],
                    contents,
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MediaNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MediaNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Media not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
