// Typed representations for resources the client has to re-serialize.
//
// Most catalog methods hand back raw JSON through `ApiResponse::json` and
// need no model here. Collectors and sources are the exception: their
// update flows are read-modify-write, so the fetched representation must
// survive a round trip. Commonly needed fields are modeled explicitly;
// everything else (including fields the vendor adds later) rides in the
// `extra` catch-all so a merge never drops or corrupts unknown remote
// state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Collectors ───────────────────────────────────────────────────────

/// Wrapper object the API uses for single-collector payloads:
/// `{ "collector": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorEnvelope {
    pub collector: Collector,
}

/// List response body for `GET /v1/collectors`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorList {
    pub collectors: Vec<Collector>,
}

/// A collector (data-ingestion agent), hosted or installed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collector {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_sync_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cpu: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Map<String, Value>>,
    /// Catch-all for fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Field updates for [`Client::update_collector`](crate::Client::update_collector).
///
/// Only `Some` fields are applied; everything else keeps the value fetched
/// from the server, as the API's full-representation PUT semantics require.
#[derive(Debug, Clone, Default)]
pub struct CollectorUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub time_zone: Option<String>,
    pub ephemeral: Option<bool>,
    pub target_cpu: Option<i64>,
    pub fields: Option<Map<String, Value>>,
}

impl CollectorUpdate {
    pub(crate) fn apply(&self, collector: &mut Collector) {
        if let Some(name) = &self.name {
            collector.name = name.clone();
        }
        if let Some(description) = &self.description {
            collector.description = Some(description.clone());
        }
        if let Some(category) = &self.category {
            collector.category = Some(category.clone());
        }
        if let Some(time_zone) = &self.time_zone {
            collector.time_zone = Some(time_zone.clone());
        }
        if let Some(ephemeral) = self.ephemeral {
            collector.ephemeral = Some(ephemeral);
        }
        if let Some(target_cpu) = self.target_cpu {
            collector.target_cpu = Some(target_cpu);
        }
        if let Some(fields) = &self.fields {
            collector.fields = Some(fields.clone());
        }
    }
}

// ── Sources ──────────────────────────────────────────────────────────

/// Wrapper object for single-source payloads: `{ "source": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEnvelope {
    pub source: Source,
}

/// List response body for `GET /v1/collectors/{id}/sources`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceList {
    pub sources: Vec<Source>,
}

/// A configured input on a collector.
///
/// Source objects are heavily type-specific (`sourceType` decides most of
/// the field set), so only the common spine is modeled; type-specific
/// fields live in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_date_parsing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiline_processing_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_autoline_matching: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_time_zone: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alive: Option<bool>,
    /// Catch-all for type-specific and future fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Field updates for [`Client::update_source`](crate::Client::update_source).
#[derive(Debug, Clone, Default)]
pub struct SourceUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub host_name: Option<String>,
    pub encoding: Option<String>,
    pub interval: Option<i64>,
    pub cutoff_timestamp: Option<i64>,
    pub filters: Option<Vec<Value>>,
}

impl SourceUpdate {
    pub(crate) fn apply(&self, source: &mut Source) {
        if let Some(name) = &self.name {
            source.name = name.clone();
        }
        if let Some(category) = &self.category {
            source.category = Some(category.clone());
        }
        if let Some(host_name) = &self.host_name {
            source.host_name = Some(host_name.clone());
        }
        if let Some(encoding) = &self.encoding {
            source.encoding = Some(encoding.clone());
        }
        if let Some(interval) = self.interval {
            source.interval = Some(interval);
        }
        if let Some(cutoff_timestamp) = self.cutoff_timestamp {
            source.cutoff_timestamp = Some(cutoff_timestamp);
        }
        if let Some(filters) = &self.filters {
            source.filters = Some(filters.clone());
        }
    }
}

// ── Asynchronous jobs ────────────────────────────────────────────────

/// Response to a job "start" call: an opaque identifier to poll with.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStarted {
    pub id: String,
}

/// Polled representation of a server-side job.
///
/// `status` is relayed verbatim -- the state machine
/// (`InProgress` → `Success` / `Failed` / `Cancelled` and any labels the
/// service adds later) is owned entirely by the remote service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub status: String,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobStatus {
    /// `true` once the job has left `InProgress`.
    pub fn is_terminal(&self) -> bool {
        self.status != "InProgress"
    }

    /// `true` when the job finished successfully.
    pub fn succeeded(&self) -> bool {
        self.status == "Success"
    }
}
