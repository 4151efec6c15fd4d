// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::columns::ColumnKey;
use crate::ids::RowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    NeedToStart,
    Complete,
    Blocked,
}

impl Status {
    pub const ALL: [Self; 4] = [
        Self::InProgress,
        Self::NeedToStart,
        Self::Complete,
        Self::Blocked,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "In-progress",
            Self::NeedToStart => "Need to start",
            Self::Complete => "Complete",
            Self::Blocked => "Blocked",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "In-progress" => Some(Self::InProgress),
            "Need to start" => Some(Self::NeedToStart),
            "Complete" => Some(Self::Complete),
            "Blocked" => Some(Self::Blocked),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

/// One record of the sheet. Dates and the estimated value are kept as the
/// text the sheet displays; nothing parses or validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub job_request: String,
    pub submitted: String,
    pub status: Status,
    pub submitter: String,
    pub url: String,
    pub assigned: String,
    pub priority: Priority,
    pub due_date: String,
    pub est_value: String,
}

impl Row {
    /// Text shown for `column`; also the seed for an edit buffer.
    pub fn value(&self, column: ColumnKey) -> &str {
        match column {
            ColumnKey::JobRequest => &self.job_request,
            ColumnKey::Submitted => &self.submitted,
            ColumnKey::Status => self.status.as_str(),
            ColumnKey::Submitter => &self.submitter,
            ColumnKey::Url => &self.url,
            ColumnKey::Assigned => &self.assigned,
            ColumnKey::Priority => self.priority.as_str(),
            ColumnKey::DueDate => &self.due_date,
            ColumnKey::EstValue => &self.est_value,
        }
    }
}
