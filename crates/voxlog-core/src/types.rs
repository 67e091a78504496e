// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Voxlog workspace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Status an activity record carries until the backend processes it.
pub const PENDING_STATUS: &str = "Pendiente";

/// Identifier of a server-side conversation thread.
///
/// A thread scopes exactly one utterance exchange; it is created per
/// utterance and never reused across exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub String);

/// Identifier of one agent execution over a thread's messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub String);

/// Lifecycle state of an agent run.
///
/// The service may grow new transient states; those deserialize as
/// [`RunStatus::Unknown`] and are treated as still-in-progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Completed,
    Failed,
    Cancelled,
    Expired,
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// True once the run can no longer make progress, success or not.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunStatus::Completed | RunStatus::Failed | RunStatus::Cancelled | RunStatus::Expired
        )
    }

    /// True for the terminal states that abort the exchange.
    pub fn is_terminal_failure(self) -> bool {
        matches!(
            self,
            RunStatus::Failed | RunStatus::Cancelled | RunStatus::Expired
        )
    }
}

/// A project known to the backend directory.
///
/// Snapshots are fetched fresh for every reconciliation; the directory may
/// change between utterances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Backend identifier, wire name `proyectoGuid`.
    #[serde(rename = "proyectoGuid")]
    pub guid: String,

    /// Display name, wire name `nombre`.
    #[serde(rename = "nombre")]
    pub name: String,
}

/// The provisional activity interpreted from an assistant reply.
///
/// Owned exclusively by the in-flight utterance: reconciliation fills the
/// project reference, the user may edit hours/date/note during
/// confirmation, and the draft is discarded on cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    /// Free-text project title, intended to match a directory name.
    pub title: String,
    /// Hours worked; non-negative, defaulted to 0 when absent.
    pub hours: f64,
    /// Free-text note.
    pub note: String,
    /// Calendar date the activity is registered under.
    pub registered_on: NaiveDate,
    /// Resolved project, `None` until reconciled.
    pub project: Option<Project>,
}

impl ActivityDraft {
    /// Applies a reconciled or user-selected project: the title is
    /// normalized to the project's canonical name.
    pub fn apply_project(&mut self, project: &Project) {
        self.title = project.name.clone();
        self.project = Some(project.clone());
    }

    /// Converts the confirmed draft into a submission payload.
    ///
    /// `GuidProyect` is the resolved project's guid, or the explicit empty
    /// string when no project was resolved -- never absent from the wire.
    pub fn into_record(self) -> ActivityRecord {
        let project_guid = self
            .project
            .as_ref()
            .map(|p| p.guid.clone())
            .unwrap_or_default();

        ActivityRecord {
            title: self.title,
            hours: self.hours,
            note: self.note,
            registered_on: self.registered_on,
            project_guid,
            guid: uuid::Uuid::new_v4().to_string(),
            client: String::new(),
            sales_contact: String::new(),
            internal_area: String::new(),
            status: PENDING_STATUS.to_string(),
            other: String::new(),
            sub_areas: String::new(),
            requesting_area: String::new(),
            ticket_number: String::new(),
            requirement_description: String::new(),
            activity_type: String::new(),
            attachments_path: String::new(),
            hour_type: String::new(),
            teams: String::new(),
        }
    }
}

/// The payload submitted for persistence.
///
/// Field names follow the backend contract verbatim; the classification
/// fields are mandated by the API but sent empty from this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "horas")]
    pub hours: f64,
    #[serde(rename = "observacion")]
    pub note: String,
    #[serde(rename = "fecharegistro")]
    pub registered_on: NaiveDate,
    #[serde(rename = "GuidProyect")]
    pub project_guid: String,
    /// Client-generated unique record id.
    pub guid: String,
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "comercial")]
    pub sales_contact: String,
    #[serde(rename = "areaInterna")]
    pub internal_area: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "otro")]
    pub other: String,
    #[serde(rename = "subAreas")]
    pub sub_areas: String,
    #[serde(rename = "areaSolicitante")]
    pub requesting_area: String,
    #[serde(rename = "numeroTicket")]
    pub ticket_number: String,
    #[serde(rename = "descripcionRequerimiento")]
    pub requirement_description: String,
    #[serde(rename = "tipoActividad")]
    pub activity_type: String,
    #[serde(rename = "rutaSoportes")]
    pub attachments_path: String,
    #[serde(rename = "tipoHora")]
    pub hour_type: String,
    #[serde(rename = "equipos")]
    pub teams: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(project: Option<Project>) -> ActivityDraft {
        ActivityDraft {
            title: "Acme Corp".into(),
            hours: 3.5,
            note: "sprint review".into(),
            registered_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            project,
        }
    }

    #[test]
    fn run_status_deserializes_snake_case() {
        let status: RunStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, RunStatus::InProgress);
    }

    #[test]
    fn unknown_run_status_is_not_terminal() {
        let status: RunStatus = serde_json::from_str("\"incubating\"").unwrap();
        assert_eq!(status, RunStatus::Unknown);
        assert!(!status.is_terminal());
    }

    #[test]
    fn terminal_failure_excludes_completed() {
        assert!(RunStatus::Failed.is_terminal_failure());
        assert!(RunStatus::Cancelled.is_terminal_failure());
        assert!(RunStatus::Expired.is_terminal_failure());
        assert!(RunStatus::Completed.is_terminal());
        assert!(!RunStatus::Completed.is_terminal_failure());
    }

    #[test]
    fn project_uses_backend_wire_names() {
        let project: Project =
            serde_json::from_str(r#"{"proyectoGuid":"p-1","nombre":"Acme Corp"}"#).unwrap();
        assert_eq!(project.guid, "p-1");
        assert_eq!(project.name, "Acme Corp");
    }

    #[test]
    fn record_carries_resolved_project_guid() {
        let record = draft(Some(Project {
            guid: "p-1".into(),
            name: "Acme Corp".into(),
        }))
        .into_record();

        assert_eq!(record.project_guid, "p-1");
        assert_eq!(record.status, PENDING_STATUS);
        assert!(!record.guid.is_empty());
    }

    #[test]
    fn unresolved_project_serializes_as_empty_string() {
        let record = draft(None).into_record();
        let json = serde_json::to_value(&record).unwrap();
        // Explicit empty value, never null/absent.
        assert_eq!(json["GuidProyect"], "");
        assert_eq!(json["estado"], PENDING_STATUS);
        assert_eq!(json["fecharegistro"], "2024-01-15");
        assert_eq!(json["horas"], 3.5);
    }

    #[test]
    fn apply_project_normalizes_title() {
        let mut d = draft(None);
        d.title = "acme".into();
        d.apply_project(&Project {
            guid: "p-1".into(),
            name: "Acme Corp".into(),
        });
        assert_eq!(d.title, "Acme Corp");
        assert_eq!(d.project.as_ref().unwrap().guid, "p-1");
    }
}
