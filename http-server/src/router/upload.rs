use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::{Extension, Json};
use bytes::Bytes;
use sharepoint::CanonicalPath;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No file provided")]
    MissingFile,
    #[error("Empty filename")]
    EmptyFilename,
    #[error("{0}")]
    InvalidForm(#[source] MultipartError),
    #[error("Failed to create folder structure")]
    FolderCreation(#[source] sharepoint::Error),
    #[error("Failed to upload file")]
    Upload(#[source] sharepoint::Error),
    #[error(transparent)]
    Provider(sharepoint::Error),
}

impl Error {
    fn from_folder(err: sharepoint::Error) -> Self {
        match err {
            sharepoint::Error::FolderCreation { .. } => Self::FolderCreation(err),
            other => Self::Provider(other),
        }
    }

    fn from_upload(err: sharepoint::Error) -> Self {
        match err {
            sharepoint::Error::Upload { .. } => Self::Upload(err),
            other => Self::Provider(other),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::EmptyFilename | Self::InvalidForm(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        match self {
            Self::FolderCreation(ref inner) | Self::Upload(ref inner) => {
                tracing::error!("{self}: {inner}");
            }
            _ if status.is_server_error() => tracing::error!("unable to upload: {self}"),
            _ => tracing::debug!("invalid upload request: {self}"),
        }
        super::error_response(status, self.to_string())
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct UploadResponse {
    message: &'static str,
    path: String,
}

struct FilePart {
    filename: String,
    content_type: Option<String>,
    content: Bytes,
}

#[derive(Default)]
struct UploadForm {
    path: Option<String>,
    file: Option<FilePart>,
}

/// Reads the first `file` part carrying a filename, and the first `path` field.
async fn read_form(mut multipart: Multipart) -> Result<UploadForm, Error> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await.map_err(Error::InvalidForm)? {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("file") if form.file.is_none() => {
                // a part without filename is a plain field, not a file
                let Some(filename) = field.file_name().map(String::from) else {
                    continue;
                };
                let content_type = field.content_type().map(String::from);
                let content = field.bytes().await.map_err(Error::InvalidForm)?;
                form.file = Some(FilePart {
                    filename,
                    content_type,
                    content,
                });
            }
            Some("path") if form.path.is_none() => {
                form.path = Some(field.text().await.map_err(Error::InvalidForm)?);
            }
            _ => {}
        }
    }
    Ok(form)
}

pub(crate) async fn handler(
    Extension(client): Extension<sharepoint::Client>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), Error> {
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!("not a multipart request: {rejection}");
        Error::MissingFile
    })?;
    let form = read_form(multipart).await?;
    let file = form.file.ok_or(Error::MissingFile)?;
    if file.filename.is_empty() {
        return Err(Error::EmptyFilename);
    }
    let path = CanonicalPath::normalize(form.path.as_deref().unwrap_or_default());
    tracing::info!("uploading {} in {path:?}", file.filename);

    client
        .ensure_folder_chain(&path)
        .await
        .map_err(Error::from_folder)?;
    let remote = client
        .upload_file(
            &path,
            &file.filename,
            file.content_type.as_deref(),
            file.content,
        )
        .await
        .map_err(Error::from_upload)?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "File uploaded successfully",
            path: remote.content_url(),
        }),
    ))
}
