// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::presentation::{Align, Asset, PresentationKind, Rgb};

pub const ROW_NUMBER_WIDTH: u16 = 4;
pub const ADD_COLUMN_WIDTH: u16 = 6;
pub const HEADER_TINT: Rgb = Rgb(0xEE, 0xEE, 0xEE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKey {
    JobRequest,
    Submitted,
    Status,
    Submitter,
    Url,
    Assigned,
    Priority,
    DueDate,
    EstValue,
}

impl ColumnKey {
    pub const ALL: [Self; 9] = [
        Self::JobRequest,
        Self::Submitted,
        Self::Status,
        Self::Submitter,
        Self::Url,
        Self::Assigned,
        Self::Priority,
        Self::DueDate,
        Self::EstValue,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobRequest => "Job Request",
            Self::Submitted => "Submitted",
            Self::Status => "Status",
            Self::Submitter => "Submitter",
            Self::Url => "URL",
            Self::Assigned => "Assigned",
            Self::Priority => "Priority",
            Self::DueDate => "Due Date",
            Self::EstValue => "Est. Value",
        }
    }

    pub const fn kind(self) -> PresentationKind {
        match self {
            Self::Status => PresentationKind::Status,
            Self::Url => PresentationKind::Url,
            Self::Priority => PresentationKind::Priority,
            Self::EstValue => PresentationKind::Currency,
            Self::JobRequest
            | Self::Submitted
            | Self::Submitter
            | Self::Assigned
            | Self::DueDate => PresentationKind::Text,
        }
    }

    pub const fn align(self) -> Align {
        match self {
            Self::DueDate | Self::EstValue => Align::Right,
            Self::Status | Self::Priority => Align::Center,
            _ => Align::Left,
        }
    }

    /// Width in terminal cells.
    pub const fn width(self) -> u16 {
        match self {
            Self::JobRequest => 28,
            Self::Submitted => 11,
            Self::Status => 15,
            Self::Submitter => 15,
            Self::Url => 17,
            Self::Assigned => 17,
            Self::Priority => 9,
            Self::DueDate => 11,
            Self::EstValue => 13,
        }
    }

    pub const fn header_icon(self) -> Option<Asset> {
        match self {
            Self::JobRequest => Some(Asset::Briefcase),
            Self::Submitted | Self::Status => Some(Asset::Calendar),
            Self::Submitter => Some(Asset::Person),
            Self::Url => Some(Asset::Globe),
            Self::Assigned => Some(Asset::Emoji),
            Self::Priority | Self::DueDate | Self::EstValue => None,
        }
    }

    /// Only the columns that carry a header icon get the dropdown chevron.
    pub const fn has_menu(self) -> bool {
        self.header_icon().is_some()
    }

    pub const fn header_tint(self) -> Rgb {
        match self {
            Self::Assigned => Rgb(0xE8, 0xF0, 0xE9),
            Self::Priority | Self::DueDate => Rgb(0xEA, 0xE3, 0xFC),
            Self::EstValue => Rgb(0xFF, 0xE9, 0xE0),
            _ => HEADER_TINT,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|column| *column == self)
            .unwrap_or(0)
    }

    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A colored band above the column headers spanning `span` columns from
/// `first`. A band without a label renders as blank space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupBand {
    pub label: Option<&'static str>,
    pub first: ColumnKey,
    pub span: usize,
    pub tint: Rgb,
    pub leading: Option<Asset>,
    pub trailing_more: bool,
}

pub const GROUP_BANDS: [GroupBand; 5] = [
    GroupBand {
        label: Some("Q3 Financial Overview"),
        first: ColumnKey::JobRequest,
        span: 4,
        tint: Rgb(0xE2, 0xE2, 0xE2),
        leading: Some(Asset::Link),
        trailing_more: false,
    },
    GroupBand {
        label: None,
        first: ColumnKey::Url,
        span: 1,
        tint: Rgb::WHITE,
        leading: None,
        trailing_more: false,
    },
    GroupBand {
        label: Some("ABC"),
        first: ColumnKey::Assigned,
        span: 1,
        tint: Rgb(0xD2, 0xE0, 0xD4),
        leading: Some(Asset::ArrowSplit),
        trailing_more: true,
    },
    GroupBand {
        label: Some("Answer a question"),
        first: ColumnKey::Priority,
        span: 2,
        tint: Rgb(0xDC, 0xCF, 0xFC),
        leading: Some(Asset::ArrowSplit),
        trailing_more: true,
    },
    GroupBand {
        label: Some("Extract"),
        first: ColumnKey::EstValue,
        span: 1,
        tint: Rgb(0xFA, 0xC2, 0xAF),
        leading: Some(Asset::ArrowSplit),
        trailing_more: true,
    },
];
