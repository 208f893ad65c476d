use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use store_actor::tracing::setup_tracing;
use store_actor::{Dispatched, StoreClient};
use tokio::sync::mpsc;
use tracing::{info, warn, Instrument};
use user_directory::directory::{DirectoryConfig, HttpDirectory, Latency, DEFAULT_BASE_URL};
use user_directory::lifecycle::DirectorySystem;
use user_directory::model::{CollectionSnapshot, UserDraft};
use user_directory::view::UserListView;

/// Drives the users store against a remote directory: load, create one user, delete one.
#[derive(Parser, Debug)]
#[command(name = "user-directory", version)]
struct Args {
    /// Root of the user directory service (`/users` is appended).
    #[arg(long = "base-url", env = "USER_DIRECTORY_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(
        long = "timeout-secs",
        env = "USER_DIRECTORY_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..=86_400)
    )]
    timeout_secs: u64,

    /// Delay each call so loading states are visible.
    #[arg(long = "demo-latency", env = "USER_DIRECTORY_DEMO_LATENCY")]
    demo_latency: bool,

    /// Capacity of the store's request channel.
    #[arg(
        long = "buffer",
        env = "USER_DIRECTORY_BUFFER",
        default_value_t = 32,
        value_parser = parse_buffer
    )]
    buffer: usize,
}

impl Args {
    fn directory_config(&self) -> DirectoryConfig {
        DirectoryConfig {
            request_timeout: Duration::from_secs(self.timeout_secs),
            latency: if self.demo_latency {
                Latency::demo()
            } else {
                Latency::default()
            },
            ..DirectoryConfig::with_base_url(self.base_url.clone())
        }
    }

    /// Upper bound for one operation to settle, latency included.
    fn settle_timeout(&self) -> Duration {
        let latency = self.directory_config().latency;
        Duration::from_secs(self.timeout_secs)
            .saturating_add(latency.list.max(latency.create).max(latency.delete))
    }
}

fn parse_buffer(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("buffer must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}

async fn settled(
    updates: &mut mpsc::UnboundedReceiver<Arc<CollectionSnapshot>>,
    limit: Duration,
) -> Result<Arc<CollectionSnapshot>, String> {
    tokio::time::timeout(limit, async {
        while let Some(snapshot) = updates.recv().await {
            if snapshot.is_settled() {
                return Ok(snapshot);
            }
        }
        Err("store stopped publishing".to_string())
    })
    .await
    .map_err(|_| "timed out waiting for the store".to_string())?
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    setup_tracing();

    info!(base_url = %args.base_url, "Starting user directory");

    let directory = HttpDirectory::new(args.directory_config()).map_err(|e| e.to_string())?;
    let limit = args.settle_timeout();
    let system = DirectorySystem::new(Arc::new(directory), args.buffer);

    let (tx, mut updates) = mpsc::unbounded_channel();
    let (_subscription, _) = system
        .users
        .subscribe(move |snapshot: Arc<CollectionSnapshot>| {
            let view = UserListView::from_snapshot(&snapshot);
            info!(
                list = %view.body.summary(),
                creating = view.creating,
                notice = ?view.notice,
                "View updated"
            );
            let _ = tx.send(snapshot);
        })
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("initial_load");
    let loaded = async {
        system.users.load().await.map_err(|e| e.to_string())?;
        settled(&mut updates, limit).await
    }
    .instrument(span)
    .await?;

    let draft = UserDraft::new("Ada Lovelace", "ada@example.com", "ada");
    let span = tracing::info_span!("user_creation");
    async {
        match system.users.create(draft).await.map_err(|e| e.to_string())? {
            Dispatched::Started => settled(&mut updates, limit).await.map(|_| ()),
            Dispatched::Rejected(reason) => {
                warn!(%reason, "Create was not started");
                Ok(())
            }
        }
    }
    .instrument(span)
    .await?;

    if let Some(first) = loaded.items.first() {
        let span = tracing::info_span!("user_deletion", id = %first.id);
        async {
            if system
                .users
                .remove(first.id)
                .await
                .map_err(|e| e.to_string())?
                .is_started()
            {
                settled(&mut updates, limit).await?;
            }
            Ok::<_, String>(())
        }
        .instrument(span)
        .await?;
    }

    let last = system.users.snapshot().await.map_err(|e| e.to_string())?;
    match &last.last_error {
        Some(error) => warn!(%error, items = last.items.len(), "Finished with an error"),
        None => info!(items = last.items.len(), "All operations confirmed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
