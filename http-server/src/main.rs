mod router;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// HTTP proxy uploading files to and fetching files from a SharePoint document library.
///
/// The SharePoint application and site are configured with the `SP_CLIENT_ID`, `SP_CLIENT_SECRET`,
/// `SP_TENANT_ID` and `SP_SITE_ID` environment variables.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
    /// Maximum size of an upload request, in bytes
    #[arg(long, env = "MAX_UPLOAD_SIZE", default_value_t = 100 * 1024 * 1024)]
    max_upload_size: usize,
}

impl Args {
    fn binding(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let client = sharepoint::ClientBuilder::from_env()
        .build()
        .context("unable to build sharepoint client")?;
    tracing::debug!("using site {}", client.site_id());

    let app = router::router(client, args.max_upload_size);
    let listener = tokio::net::TcpListener::bind(args.binding())
        .await
        .with_context(|| format!("unable to bind {}", args.binding()))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
