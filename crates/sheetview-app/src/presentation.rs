// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Static lookup tables that turn cell values into badges, tones and glyphs.
//! Adding a status or priority means adding a table row.

use crate::model::{Priority, Status};

pub const UNKNOWN_STATUS_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(0xFF, 0xFF, 0xFF);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationKind {
    Text,
    Status,
    Priority,
    Url,
    Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Logical names for the pictures the sheet shows. Glyphs come from
/// [`IconSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    StatusInProgress,
    StatusNeedToStart,
    StatusComplete,
    StatusBlocked,
    Currency,
    Panel,
    Chevron,
    ChevronDouble,
    ChevronDown,
    More,
    Search,
    Bell,
    Avatar,
    EyeOff,
    ArrowUpDown,
    Filter,
    ArrowAutofit,
    Import,
    Export,
    Share,
    ArrowSplit,
    Link,
    BlankCell,
    Briefcase,
    Calendar,
    Person,
    Globe,
    Emoji,
    Plus,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub status: Status,
    pub icon: Asset,
    pub fg: Rgb,
    pub bg: Rgb,
}

pub const STATUS_STYLES: [StatusStyle; 4] = [
    StatusStyle {
        status: Status::InProgress,
        icon: Asset::StatusInProgress,
        fg: Rgb(0x85, 0x64, 0x0B),
        bg: Rgb(0xFF, 0xF3, 0xD6),
    },
    StatusStyle {
        status: Status::NeedToStart,
        icon: Asset::StatusNeedToStart,
        fg: Rgb(0x47, 0x55, 0x69),
        bg: Rgb(0xE2, 0xE8, 0xF0),
    },
    StatusStyle {
        status: Status::Complete,
        icon: Asset::StatusComplete,
        fg: Rgb(0x0A, 0x6E, 0x3D),
        bg: Rgb(0xD3, 0xF2, 0xE3),
    },
    StatusStyle {
        status: Status::Blocked,
        icon: Asset::StatusBlocked,
        fg: Rgb(0xC2, 0x22, 0x19),
        bg: Rgb(0xFF, 0xE1, 0xDE),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityTone {
    pub priority: Priority,
    pub fg: Rgb,
    pub bg: Rgb,
}

pub const PRIORITY_TONES: [PriorityTone; 3] = [
    PriorityTone {
        priority: Priority::High,
        fg: Rgb(0xB9, 0x1C, 0x1C),
        bg: Rgb(0xFE, 0xF2, 0xF2),
    },
    PriorityTone {
        priority: Priority::Medium,
        fg: Rgb(0xB4, 0x53, 0x09),
        bg: Rgb(0xFF, 0xFB, 0xEB),
    },
    PriorityTone {
        priority: Priority::Low,
        fg: Rgb(0x1D, 0x4E, 0xD8),
        bg: Rgb(0xEF, 0xF6, 0xFF),
    },
];

pub fn status_style(value: &str) -> Option<&'static StatusStyle> {
    let status = Status::parse(value)?;
    STATUS_STYLES.iter().find(|style| style.status == status)
}

/// `None` leaves the badge unstyled, like a missing style class.
pub fn priority_tone(value: &str) -> Option<&'static PriorityTone> {
    let priority = Priority::parse(value)?;
    PRIORITY_TONES.iter().find(|tone| tone.priority == priority)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusBadge {
    Known {
        label: &'static str,
        icon: Asset,
        fg: Rgb,
        bg: Rgb,
    },
    Unknown,
}

impl StatusBadge {
    pub fn for_value(value: &str) -> Self {
        match status_style(value) {
            Some(style) => Self::Known {
                label: style.status.as_str(),
                icon: style.icon,
                fg: style.fg,
                bg: style.bg,
            },
            None => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Known { label, .. } => label,
            Self::Unknown => UNKNOWN_STATUS_LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconSet {
    pub ascii: bool,
}

impl IconSet {
    pub const fn unicode() -> Self {
        Self { ascii: false }
    }

    pub const fn ascii() -> Self {
        Self { ascii: true }
    }

    pub fn glyph(self, asset: Asset) -> &'static str {
        let (unicode, ascii) = glyphs(asset);
        if self.ascii { ascii } else { unicode }
    }
}

const fn glyphs(asset: Asset) -> (&'static str, &'static str) {
    match asset {
        Asset::StatusInProgress => ("◐", "~"),
        Asset::StatusNeedToStart => ("○", "o"),
        Asset::StatusComplete => ("●", "*"),
        Asset::StatusBlocked => ("⊘", "x"),
        Asset::Currency => ("₹", "Rs"),
        Asset::Panel => ("▣", "#"),
        Asset::Chevron => ("›", ">"),
        Asset::ChevronDouble => ("»", ">>"),
        Asset::ChevronDown => ("⌄", "v"),
        Asset::More => ("⋯", "..."),
        Asset::Search => ("⌕", "?"),
        Asset::Bell => ("🔔", "(!)"),
        Asset::Avatar => ("◉", "@"),
        Asset::EyeOff => ("⊖", "-"),
        Asset::ArrowUpDown => ("⇅", "^v"),
        Asset::Filter => ("⏷", "Y"),
        Asset::ArrowAutofit => ("↔", "<>"),
        Asset::Import => ("⤓", "v"),
        Asset::Export => ("⤒", "^"),
        Asset::Share => ("⇪", "^"),
        Asset::ArrowSplit => ("⑂", "Y"),
        Asset::Link => ("⛓", "&"),
        Asset::BlankCell => ("▢", " "),
        Asset::Briefcase => ("▤", "="),
        Asset::Calendar => ("▦", "="),
        Asset::Person => ("☺", "="),
        Asset::Globe => ("◍", "="),
        Asset::Emoji => ("☻", "="),
        Asset::Plus => ("+", "+"),
        Asset::Dot => ("●", "*"),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Asset, IconSet, PRIORITY_TONES, STATUS_STYLES, StatusBadge, UNKNOWN_STATUS_LABEL,
        priority_tone, status_style,
    };
    use crate::model::{Priority, Status};

    #[test]
    fn every_status_has_exactly_one_style_row() {
        for status in Status::ALL {
            let matches = STATUS_STYLES
                .iter()
                .filter(|style| style.status == status)
                .count();
            assert_eq!(matches, 1, "{status:?}");
        }
    }

    #[test]
    fn every_priority_has_exactly_one_tone_row() {
        for priority in Priority::ALL {
            let matches = PRIORITY_TONES
                .iter()
                .filter(|tone| tone.priority == priority)
                .count();
            assert_eq!(matches, 1, "{priority:?}");
        }
    }

    #[test]
    fn unrecognized_status_falls_back_to_unknown_label() {
        assert_eq!(StatusBadge::for_value("On hold"), StatusBadge::Unknown);
        assert_eq!(StatusBadge::for_value("On hold").label(), UNKNOWN_STATUS_LABEL);
        assert_eq!(StatusBadge::for_value("").label(), "Unknown");
        assert!(status_style("complete").is_none());
    }

    #[test]
    fn known_status_badge_carries_its_icon() {
        let badge = StatusBadge::for_value("Blocked");
        assert_eq!(badge.label(), "Blocked");
        assert!(matches!(
            badge,
            StatusBadge::Known {
                icon: Asset::StatusBlocked,
                ..
            }
        ));
    }

    #[test]
    fn unrecognized_priority_has_no_tone() {
        assert!(priority_tone("Critical").is_none());
        assert_eq!(
            priority_tone("Medium").map(|tone| tone.priority),
            Some(Priority::Medium)
        );
    }

    #[test]
    fn ascii_icon_set_avoids_non_ascii_glyphs() {
        let icons = IconSet::ascii();
        for asset in [
            Asset::Currency,
            Asset::StatusComplete,
            Asset::ChevronDown,
            Asset::Bell,
            Asset::Link,
        ] {
            assert!(icons.glyph(asset).is_ascii(), "{asset:?}");
        }
        assert_eq!(IconSet::unicode().glyph(Asset::Currency), "₹");
    }
}
