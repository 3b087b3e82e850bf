//! HTTP client for the external layout-storage API.
//!
//! All operations are simple request/response against the store's REST
//! surface, exchanging the whole-document contract from `seatkit-core`.
//! Saves are last-write-wins snapshots: there is no locking and no
//! optimistic-concurrency token, so two simultaneous editors of one layout
//! clobber each other by design.
//!
//! No operation retries automatically. A failure is returned to the caller,
//! who surfaces an error state with a manual retry affordance.

use serde::Deserialize;
use tracing::{debug, warn};

use seatkit_core::model::{normalize_feed, DecorFeedEntry, DecorItem};
use seatkit_core::VenueLayout;

use crate::config::StoreConfig;
use crate::error::{StorageError, StorageResult};

/// Optional filters for listing layouts.
#[derive(Debug, Clone, Default)]
pub struct LayoutFilter {
    pub venue_owner_id: Option<String>,
    pub event_id: Option<String>,
}

/// Seat availability summary for a layout, as reported by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatAvailability {
    #[serde(rename = "layoutId")]
    pub layout_id: String,
    #[serde(rename = "totalSeats", default)]
    pub total_seats: u32,
    #[serde(rename = "bookedSeats", default)]
    pub booked_seats: u32,
    #[serde(rename = "availableSeats", default)]
    pub available_seats: u32,
}

/// Client for the layout-storage collaborator.
#[derive(Debug, Clone)]
pub struct LayoutStoreClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl LayoutStoreClient {
    /// Builds a client from configuration. The fetch timeout is applied per
    /// request, not on the connection pool.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Maps a non-success response to the error taxonomy.
    async fn check(response: reqwest::Response, id: &str) -> StorageResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status.as_u16() {
            404 => Err(StorageError::NotFound { id: id.to_string() }),
            401 | 403 => Err(StorageError::PermissionDenied),
            code => {
                let message = response.text().await.unwrap_or_default();
                Err(StorageError::Api { status: code, message })
            }
        }
    }

    /// Persists a new layout; the store assigns `_id` and timestamps.
    pub async fn create_layout(&self, layout: &VenueLayout) -> StorageResult<VenueLayout> {
        let response = self
            .http
            .post(self.url("/layouts"))
            .json(layout)
            .send()
            .await?;
        let response = Self::check(response, "").await?;
        Ok(response.json().await?)
    }

    /// Lists layouts, optionally filtered by owner or event.
    pub async fn list_layouts(&self, filter: &LayoutFilter) -> StorageResult<Vec<VenueLayout>> {
        let mut request = self.http.get(self.url("/layouts"));
        if let Some(owner) = &filter.venue_owner_id {
            request = request.query(&[("venueOwnerId", owner)]);
        }
        if let Some(event) = &filter.event_id {
            request = request.query(&[("eventId", event)]);
        }
        let response = Self::check(request.send().await?, "").await?;
        Ok(response.json().await?)
    }

    /// Fetches one layout, aborting after the configured timeout (12 s by
    /// default). The deadline covers the whole fetch, body read and decode
    /// included, so a server that trickles the body cannot hang the editor.
    /// A timeout is reported distinctly from other failures so the UI can
    /// say "Request timed out".
    pub async fn get_layout(&self, id: &str) -> StorageResult<VenueLayout> {
        let timeout = self.config.fetch_timeout();
        let fetch = async {
            let response = self
                .http
                .get(self.url(&format!("/layouts/{id}")))
                .send()
                .await?;
            let response = Self::check(response, id).await?;
            Ok(response.json().await?)
        };
        tokio::time::timeout(timeout, fetch)
            .await
            .map_err(|_| StorageError::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            })?
    }

    /// Applies a partial update to a stored layout document.
    pub async fn update_layout(
        &self,
        id: &str,
        patch: &serde_json::Value,
    ) -> StorageResult<VenueLayout> {
        let response = self
            .http
            .patch(self.url(&format!("/layouts/{id}")))
            .json(patch)
            .send()
            .await?;
        let response = Self::check(response, id).await?;
        Ok(response.json().await?)
    }

    /// Saves a whole-document snapshot over the stored layout. The layout
    /// must have been persisted before: an unsaved one has no store id to
    /// PATCH, use [`create_layout`](Self::create_layout) instead.
    pub async fn save_layout(&self, layout: &VenueLayout) -> StorageResult<VenueLayout> {
        if layout.id.is_empty() {
            return Err(StorageError::NotFound { id: String::new() });
        }
        let patch = serde_json::to_value(layout)?;
        self.update_layout(&layout.id, &patch).await
    }

    pub async fn delete_layout(&self, id: &str) -> StorageResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/layouts/{id}")))
            .send()
            .await?;
        Self::check(response, id).await?;
        Ok(())
    }

    /// Toggles whether a layout is the active one for its venue.
    pub async fn set_active(&self, id: &str, is_active: bool) -> StorageResult<VenueLayout> {
        let response = self
            .http
            .post(self.url(&format!("/layouts/{id}/active")))
            .json(&serde_json::json!({ "isActive": is_active }))
            .send()
            .await?;
        let response = Self::check(response, id).await?;
        Ok(response.json().await?)
    }

    /// Duplicates a stored layout, returning the copy.
    pub async fn duplicate_layout(&self, id: &str) -> StorageResult<VenueLayout> {
        let response = self
            .http
            .post(self.url(&format!("/layouts/{id}/duplicate")))
            .send()
            .await?;
        let response = Self::check(response, id).await?;
        Ok(response.json().await?)
    }

    /// Seat availability summary for a layout.
    pub async fn seat_availability(&self, id: &str) -> StorageResult<SeatAvailability> {
        let response = self
            .http
            .get(self.url(&format!("/layouts/{id}/availability")))
            .send()
            .await?;
        let response = Self::check(response, id).await?;
        Ok(response.json().await?)
    }

    /// Fetches the per-event decor feed, normalized at this boundary.
    ///
    /// The overlay is cosmetic, so this is fail-silent by design: any fetch
    /// or decode failure logs and yields an empty list, and malformed
    /// entries are dropped individually.
    pub async fn fetch_event_decor(&self, event_id: &str) -> Vec<DecorItem> {
        let result: StorageResult<Vec<DecorFeedEntry>> = async {
            let response = self
                .http
                .get(self.url(&format!("/events/{event_id}/decor")))
                .send()
                .await?;
            let response = Self::check(response, event_id).await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(entries) => {
                let items = normalize_feed(entries);
                debug!(event_id, count = items.len(), "decor feed loaded");
                items
            }
            Err(err) => {
                warn!(event_id, error = %err, "decor feed unavailable, rendering nothing");
                Vec::new()
            }
        }
    }
}
