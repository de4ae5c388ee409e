//! Deployment trace response shapes.
//!
//! DESIGN
//! ======
//! These types mirror the API's `ListDeploymentTracesResponse` object shape
//! (camelCase field names). Every scalar is optional: the API omits zero
//! values and the views substitute fallbacks at the point of use (see
//! [`crate::display`]), so decoding never rejects a sparse record.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::TraceError;

/// A recorded commit event that may trigger zero or more deployments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    /// Unique trace identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Project the trace belongs to.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Commit subject line.
    #[serde(default)]
    pub title: Option<String>,
    /// Full commit message body.
    #[serde(default)]
    pub commit_message: Option<String>,
    /// Commit SHA.
    #[serde(default)]
    pub commit_hash: Option<String>,
    /// Link to the commit on the git host.
    #[serde(default)]
    pub commit_url: Option<String>,
    /// Commit time in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub commit_timestamp: Option<i64>,
    /// Commit author display name.
    #[serde(default)]
    pub author: Option<String>,
    /// Record creation time in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub created_at: Option<i64>,
    /// Record update time in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub updated_at: Option<i64>,
}

/// Lifecycle status of a deployment, encoded numerically on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum DeploymentStatus {
    #[default]
    Pending,
    Planned,
    Running,
    RollingBack,
    Success,
    Failure,
    Cancelled,
    /// A status number this client does not know yet.
    Unknown(i32),
}

impl DeploymentStatus {
    /// Upper-case badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Planned => "PLANNED",
            Self::Running => "RUNNING",
            Self::RollingBack => "ROLLING BACK",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::Cancelled => "CANCELLED",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// CSS modifier suffix for the status badge.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Pending | Self::Planned => "pending",
            Self::Running | Self::RollingBack => "running",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Cancelled => "cancelled",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Whether the deployment has stopped changing.
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Success | Self::Failure | Self::Cancelled)
    }
}

impl From<i32> for DeploymentStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Pending,
            1 => Self::Planned,
            2 => Self::Running,
            3 => Self::RollingBack,
            4 => Self::Success,
            5 => Self::Failure,
            6 => Self::Cancelled,
            other => Self::Unknown(other),
        }
    }
}

impl From<DeploymentStatus> for i32 {
    fn from(value: DeploymentStatus) -> Self {
        match value {
            DeploymentStatus::Pending => 0,
            DeploymentStatus::Planned => 1,
            DeploymentStatus::Running => 2,
            DeploymentStatus::RollingBack => 3,
            DeploymentStatus::Success => 4,
            DeploymentStatus::Failure => 5,
            DeploymentStatus::Cancelled => 6,
            DeploymentStatus::Unknown(other) => other,
        }
    }
}

/// Minimal data for a deployment triggered by a trace, enough to render a
/// row and link to its detail page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSummary {
    /// Deployment identifier; list key and detail path segment.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub id: String,
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default)]
    pub application_name: Option<String>,
    #[serde(default)]
    pub piped_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_status")]
    pub status: Option<DeploymentStatus>,
    #[serde(default)]
    pub status_reason: Option<String>,
    /// One-line description of what the deployment changes.
    #[serde(default)]
    pub summary: Option<String>,
    /// Creation time in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub created_at: Option<i64>,
    /// Last update time in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_opt_i64")]
    pub updated_at: Option<i64>,
}

/// One trace paired with the deployments it triggered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTraceRes {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub trace: Trace,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub deployments_list: Vec<DeploymentSummary>,
}

/// Response body of the list-deployment-traces endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDeploymentTracesResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub traces_list: Vec<DeploymentTraceRes>,
    /// Pagination cursor for the next page; empty when exhausted.
    #[serde(default)]
    pub cursor: Option<String>,
}

impl ListDeploymentTracesResponse {
    /// Whether the server reported another page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Decode a full list response body.
///
/// # Errors
///
/// Returns [`TraceError::EmptyBody`] for a blank body and
/// [`TraceError::Decode`] when the JSON does not match the response shape.
pub fn decode_list_response(body: &str) -> Result<ListDeploymentTracesResponse, TraceError> {
    if body.trim().is_empty() {
        return Err(TraceError::EmptyBody);
    }
    Ok(serde_json::from_str(body)?)
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_status<'de, D>(deserializer: D) -> Result<Option<DeploymentStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.map(DeploymentStatus::from))
}

/// Accepts an integer, an integral float, a decimal string (int64 values are
/// sometimes serialized as strings), or `null`.
fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom("expected integer string"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
