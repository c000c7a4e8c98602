//! JSON bodies exchanged over HTTP.
//!
//! Field names match the public JSON shape exactly: a task is
//! `{ "id": string, "title": string, "description": string }`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A task as it appears on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /tasks` and `PUT /tasks/{id}`.
///
/// Both fields default to empty when omitted; the server does not require either.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskReq {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
