use crate::auth::AccessToken;
use crate::RemoteFolder;

/// The empty `folder` facet marks the new item as a folder
#[derive(serde::Serialize)]
struct FolderFacet {}

#[derive(serde::Serialize)]
struct CreateFolderPayload<'a> {
    name: &'a str,
    folder: FolderFacet,
    #[serde(rename = "@microsoft.graph.conflictBehavior")]
    conflict_behavior: &'static str,
}

impl crate::Client {
    /// Creates a folder named `name` in `parent`.
    ///
    /// When an item with the same name already exists, the provider renames the new folder.
    /// The returned folder always carries the requested name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FolderCreation`](crate::Error::FolderCreation) when the provider
    /// doesn't respond with `200 OK` or `201 Created`.
    #[tracing::instrument(skip(self, token, parent), fields(parent = parent.url()))]
    pub async fn create_folder(
        &self,
        token: &AccessToken,
        parent: &RemoteFolder,
        name: &str,
    ) -> crate::Result<RemoteFolder> {
        let payload = CreateFolderPayload {
            name,
            folder: FolderFacet {},
            conflict_behavior: super::CONFLICT_BEHAVIOR,
        };
        let res = self
            .post_request_json(token, &parent.children_url(), &payload)
            .await?;
        if res.is_ok_or_created() {
            tracing::info!("folder {name:?} created");
            Ok(parent.child(name))
        } else {
            tracing::error!(
                "unable to create folder {name:?}, status={} body={}",
                res.status,
                res.body
            );
            Err(crate::Error::FolderCreation {
                name: name.to_string(),
                status: res.status.as_u16(),
                body: res.body,
            })
        }
    }
}
