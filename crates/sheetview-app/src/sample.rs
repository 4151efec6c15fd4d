// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::RowId;
use crate::model::{Priority, Row, Status};

struct SampleRow {
    job_request: &'static str,
    submitted: &'static str,
    status: Status,
    submitter: &'static str,
    url: &'static str,
    assigned: &'static str,
    priority: Priority,
    due_date: &'static str,
    est_value: &'static str,
}

const SAMPLE_ROWS: [SampleRow; 5] = [
    SampleRow {
        job_request: "Launch social media campaign for pro...",
        submitted: "15-11-2024",
        status: Status::InProgress,
        submitter: "Aisha Patel",
        url: "www.aishapatel...",
        assigned: "Sophie Choudhury",
        priority: Priority::Medium,
        due_date: "20-11-2024",
        est_value: "6,200,000",
    },
    SampleRow {
        job_request: "Update press kit for company redesign",
        submitted: "28-10-2024",
        status: Status::NeedToStart,
        submitter: "Irfan Khan",
        url: "www.irfankhan...",
        assigned: "Tejas Pandey",
        priority: Priority::High,
        due_date: "30-10-2024",
        est_value: "3,500,000",
    },
    SampleRow {
        job_request: "Finalize user testing feedback for app...",
        submitted: "05-12-2024",
        status: Status::InProgress,
        submitter: "Mark Johnson",
        url: "www.markjohns...",
        assigned: "Rachel Lee",
        priority: Priority::Medium,
        due_date: "10-12-2024",
        est_value: "4,750,000",
    },
    SampleRow {
        job_request: "Design new features for the website",
        submitted: "10-01-2025",
        status: Status::Complete,
        submitter: "Emily Green",
        url: "www.emilygreen...",
        assigned: "Tom Wright",
        priority: Priority::Low,
        due_date: "15-01-2025",
        est_value: "5,800,000",
    },
    SampleRow {
        job_request: "Prepare financial report for Q4",
        submitted: "25-01-2025",
        status: Status::Blocked,
        submitter: "Jessica Brown",
        url: "www.jessicabro...",
        assigned: "Kevin Smith",
        priority: Priority::Low,
        due_date: "30-01-2025",
        est_value: "2,800,000",
    },
];

/// The fixed records the sheet ships with. Ids start at 1.
pub fn sample_rows() -> Vec<Row> {
    SAMPLE_ROWS
        .iter()
        .zip(1_i64..)
        .map(|(sample, id)| Row {
            id: RowId::new(id),
            job_request: sample.job_request.to_owned(),
            submitted: sample.submitted.to_owned(),
            status: sample.status,
            submitter: sample.submitter.to_owned(),
            url: sample.url.to_owned(),
            assigned: sample.assigned.to_owned(),
            priority: sample.priority,
            due_date: sample.due_date.to_owned(),
            est_value: sample.est_value.to_owned(),
        })
        .collect()
}
