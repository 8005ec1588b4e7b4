use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::actions::Action;
use crate::api::{ApiError, CreatePostArgs, DataProvider, UpdatePostArgs};
use crate::constants;

pub type FetchId = u64;

#[derive(Debug)]
pub struct BackgroundFetch {
    pub id: FetchId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Spawns portal API calls in the background and reports their outcome
/// over an action channel drained by the event loop.
///
/// Loads are tagged with the caller's generation token; the owner of the
/// target list compares tokens before applying a completion, so a fetch
/// that outlives its view can never clobber newer state.
pub struct FetchManager {
    fetches: HashMap<FetchId, BackgroundFetch>,
    next_fetch_id: FetchId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl FetchManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                fetches: HashMap::new(),
                next_fetch_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn track<F>(&mut self, description: String, future: F) -> FetchId
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let fetch_id = self.next_fetch_id;
        self.next_fetch_id += 1;

        let fetch = BackgroundFetch {
            id: fetch_id,
            handle: tokio::spawn(future),
            description,
            started_at: std::time::Instant::now(),
        };

        self.fetches.insert(fetch_id, fetch);
        fetch_id
    }

    /// Load the social feed.
    pub fn spawn_feed_load(&mut self, provider: Arc<dyn DataProvider>, generation: Uuid) -> FetchId {
        let sender = self.action_sender.clone();
        self.track("Loading feed".to_string(), async move {
            let action = match provider.get_posts().await {
                Ok(posts) => Action::FeedLoaded { generation, posts },
                Err(e) => fetch_failed(constants::ERROR_FEED_LOAD_FAILED, &e),
            };
            let _ = sender.send(action);
        })
    }

    /// Load a single post (detail view or edit form prefill).
    pub fn spawn_post_load(&mut self, provider: Arc<dyn DataProvider>, id: i64, generation: Uuid) -> FetchId {
        let sender = self.action_sender.clone();
        self.track(format!("Loading post {}", id), async move {
            let action = match provider.get_post(id).await {
                Ok(post) => Action::PostLoaded { generation, post },
                Err(e) => fetch_failed(constants::ERROR_POST_LOAD_FAILED, &e),
            };
            let _ = sender.send(action);
        })
    }

    /// Load the folders of the configured class.
    pub fn spawn_folders_load(&mut self, provider: Arc<dyn DataProvider>, class_id: i64, generation: Uuid) -> FetchId {
        let sender = self.action_sender.clone();
        self.track("Loading folders".to_string(), async move {
            let action = match provider.get_folders(class_id).await {
                Ok(folders) => Action::FoldersLoaded { generation, folders },
                Err(e) => fetch_failed(constants::ERROR_MODULES_LOAD_FAILED, &e),
            };
            let _ = sender.send(action);
        })
    }

    /// Load the modules of the configured class, filtered to a folder.
    pub fn spawn_modules_load(
        &mut self,
        provider: Arc<dyn DataProvider>,
        class_id: i64,
        folder_id: Option<i64>,
        generation: Uuid,
    ) -> FetchId {
        let sender = self.action_sender.clone();
        self.track("Loading modules".to_string(), async move {
            let action = match provider.get_modules(class_id, folder_id).await {
                Ok(modules) => Action::ModulesLoaded { generation, modules },
                Err(e) => fetch_failed(constants::ERROR_MODULES_LOAD_FAILED, &e),
            };
            let _ = sender.send(action);
        })
    }

    /// Resolve the current user once at startup.
    pub fn spawn_session_resolve(&mut self, provider: Arc<dyn DataProvider>) -> FetchId {
        let sender = self.action_sender.clone();
        self.track("Resolving session".to_string(), async move {
            // An unreachable portal degrades to the unauthenticated state;
            // the feed still loads read-only
            let user = provider.me().await.unwrap_or(None);
            let _ = sender.send(Action::SessionResolved { user });
        })
    }

    /// Publish a new post.
    pub fn spawn_post_create(&mut self, provider: Arc<dyn DataProvider>, args: CreatePostArgs) -> FetchId {
        let sender = self.action_sender.clone();
        self.track("Publishing post".to_string(), async move {
            let action = match provider.create_post(args).await {
                Ok(post) => Action::PostSaved { id: Some(post.id) },
                Err(e) => fetch_failed(constants::ERROR_POST_CREATE_FAILED, &e),
            };
            let _ = sender.send(action);
        })
    }

    /// Save edits to an existing post.
    pub fn spawn_post_update(&mut self, provider: Arc<dyn DataProvider>, id: i64, args: UpdatePostArgs) -> FetchId {
        let sender = self.action_sender.clone();
        self.track(format!("Updating post {}", id), async move {
            let action = match provider.update_post(id, args).await {
                Ok(post) => Action::PostSaved { id: Some(post.id) },
                Err(e) => fetch_failed(constants::ERROR_POST_UPDATE_FAILED, &e),
            };
            let _ = sender.send(action);
        })
    }

    /// Delete a post.
    pub fn spawn_post_delete(&mut self, provider: Arc<dyn DataProvider>, id: i64) -> FetchId {
        let sender = self.action_sender.clone();
        self.track(format!("Deleting post {}", id), async move {
            let action = match provider.delete_post(id).await {
                Ok(()) => Action::PostDeleted(id),
                Err(e) => fetch_failed(constants::ERROR_POST_DELETE_FAILED, &e),
            };
            let _ = sender.send(action);
        })
    }

    /// Schedule the one-shot delayed chrome re-assertion that follows
    /// every theme change.
    pub fn spawn_chrome_reassert(&mut self, delay_ms: u64) -> FetchId {
        let sender = self.action_sender.clone();
        self.track("Re-asserting chrome".to_string(), async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
            let _ = sender.send(Action::ReassertChrome);
        })
    }

    /// Check for completed fetches and clean them up.
    pub fn cleanup_finished_fetches(&mut self) {
        let finished: Vec<FetchId> = self
            .fetches
            .iter()
            .filter(|(_, fetch)| fetch.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for fetch_id in finished {
            self.fetches.remove(&fetch_id);
        }
    }

    /// Cancel all running fetches.
    pub fn cancel_all_fetches(&mut self) {
        for (_, fetch) in self.fetches.drain() {
            fetch.handle.abort();
        }
    }

    /// Get the number of active fetches.
    pub fn fetch_count(&self) -> usize {
        self.fetches.len()
    }
}

impl Drop for FetchManager {
    fn drop(&mut self) {
        // Cancel all fetches when the manager is dropped
        self.cancel_all_fetches();
    }
}

fn fetch_failed(context: &str, error: &ApiError) -> Action {
    Action::FetchFailed {
        context: context.to_string(),
        message: error.to_string(),
    }
}
