// src/search/views.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const VIEW_ID_BYTES: usize = 16;
pub const VIEW_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
pub const MAX_TRACKED_VIEWS: usize = 10_000;

/// Generate an id for a freshly rendered results page.
pub fn new_view_id() -> String {
    generate_view_id(&mut OsRng, VIEW_ID_BYTES)
}

/// URL-safe base64, no padding, so the id can sit in a form field untouched.
pub fn generate_view_id<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Proof that a results request was issued, and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub view_id: String,
    pub seq: u64,
}

struct ViewSlot {
    latest: u64,
    touched: Instant,
}

/// Tracks the newest results request per page view.
///
/// A results request takes a ticket when it arrives; once its backend fetch
/// finishes it only gets rendered if no newer ticket was handed out for the same
/// view in the meantime. That keeps a slow, older response from overwriting
/// the results of a newer query.
///
/// View ids come from the client, so the map is bounded: idle views expire and,
/// past `max_views`, the least recently used view is forgotten.
pub struct ViewRegistry {
    slots: Mutex<HashMap<String, ViewSlot>>,
    idle_ttl: Duration,
    max_views: usize,
    // Shared across views so a forgotten view that comes back never reuses a
    // sequence number an old in-flight request still holds.
    next_seq: AtomicU64,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new(VIEW_IDLE_TTL, MAX_TRACKED_VIEWS)
    }
}

impl ViewRegistry {
    pub fn new(idle_ttl: Duration, max_views: usize) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            idle_ttl,
            max_views: max_views.max(1),
            next_seq: AtomicU64::new(1),
        }
    }

    pub fn begin(&self, view_id: &str) -> Ticket {
        let now = Instant::now();
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());

        let ttl = self.idle_ttl;
        slots.retain(|id, slot| id == view_id || now.duration_since(slot.touched) < ttl);

        if !slots.contains_key(view_id) && slots.len() >= self.max_views {
            let oldest = slots
                .iter()
                .min_by_key(|(_, slot)| slot.touched)
                .map(|(id, _)| id.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(view_id = %oldest, "view registry full, forgetting oldest view");
                slots.remove(&oldest);
            }
        }

        let slot = slots.entry(view_id.to_string()).or_insert(ViewSlot {
            latest: 0,
            touched: now,
        });
        slot.latest = self.next_seq.fetch_add(1, Ordering::Relaxed);
        slot.touched = now;

        Ticket {
            view_id: view_id.to_string(),
            seq: slot.latest,
        }
    }

    /// True if `ticket` is still the newest one issued for its view. A view the
    /// registry has forgotten counts as current so the response is not lost.
    pub fn is_latest(&self, ticket: &Ticket) -> bool {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots
            .get(&ticket.view_id)
            .map(|slot| slot.latest == ticket.seq)
            .unwrap_or(true)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
