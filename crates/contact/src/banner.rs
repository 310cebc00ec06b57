use parking_lot::Mutex;
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tokio::{runtime::Handle, task::JoinHandle};

use crate::view::{Banner, BannerId, BannerKind, FormView};

pub const DEFAULT_BANNER_TTL: Duration = Duration::from_millis(5000);

/// Single banner slot with timed dismissal.
///
/// Showing a banner replaces whatever is on screen and aborts the previous
/// dismissal task, so at most one banner and one timer are alive at a time.
/// Outside a tokio runtime banners are shown but never dismissed on a timer.
#[derive(Debug)]
pub struct Banners<V: FormView> {
    view: Arc<V>,
    ttl: Duration,
    next_id: AtomicU64,
    dismissal: Mutex<Option<JoinHandle<()>>>,
}

impl<V: FormView> Banners<V> {
    pub fn new(view: Arc<V>, ttl: Duration) -> Self {
        Self {
            view,
            ttl,
            next_id: AtomicU64::new(1),
            dismissal: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn show(&self, kind: BannerKind, text: impl Into<String>) -> BannerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let text = text.into();
        let mut dismissal = self.dismissal.lock();

        if let Some(previous) = dismissal.take() {
            previous.abort();
        }

        self.view.remove_banners();
        tracing::debug!(banner.id = id, banner.kind = %kind, "{text}");
        self.view.insert_banner(Banner { id, kind, text });

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(banner.id = id, "no tokio runtime, banner stays until replaced");
            return id;
        };

        let view = self.view.clone();
        let ttl = self.ttl;
        *dismissal = Some(runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            if view.remove_banner(id) {
                tracing::debug!(banner.id = id, "banner dismissed");
            }
        }));

        id
    }

    pub fn success(&self, text: impl Into<String>) -> BannerId {
        self.show(BannerKind::Success, text)
    }

    pub fn error(&self, text: impl Into<String>) -> BannerId {
        self.show(BannerKind::Error, text)
    }

    pub fn clear(&self) {
        if let Some(previous) = self.dismissal.lock().take() {
            previous.abort();
        }

        self.view.remove_banners();
    }
}

impl<V: FormView> Drop for Banners<V> {
    fn drop(&mut self) {
        if let Some(previous) = self.dismissal.get_mut().take() {
            previous.abort();
        }
    }
}
