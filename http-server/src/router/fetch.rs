use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use sharepoint::path::split_file_path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch file")]
    UnableFetchFile(#[source] sharepoint::Error),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnableFetchFile(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let Self::UnableFetchFile(ref inner) = self;
        tracing::warn!("{self}: {inner}");
        super::error_response(self.status_code(), self.to_string())
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct FetchResponse {
    download_url: String,
    filename: String,
    path: String,
}

pub(crate) async fn handler(
    Extension(client): Extension<sharepoint::Client>,
    Path(filepath): Path<String>,
) -> Result<Json<FetchResponse>, Error> {
    let (path, filename) = split_file_path(&filepath);
    tracing::info!("fetching {filename} in {path:?}");
    let download_url = client
        .get_download_url(&path, &filename)
        .await
        .map_err(Error::UnableFetchFile)?;
    Ok(Json(FetchResponse {
        download_url,
        filename,
        path: path.into_inner(),
    }))
}
