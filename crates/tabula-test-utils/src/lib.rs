//! Test utilities and mock types for Tabula development.
//!
//! Provides a recording [`MockSession`] implementing
//! [`Session`](tabula_record::Session), and the fixture records in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use parking_lot::Mutex;
use tabula_core::RawValue;
use tabula_record::Session;

/// One builder entry point call captured by [`MockSession`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Select {
        table: String,
        columns: Vec<String>,
    },
    Insert {
        table: String,
        columns: Vec<String>,
        values: Vec<RawValue>,
    },
    Update {
        table: String,
        assignments: Vec<(String, RawValue)>,
    },
    Delete {
        table: String,
    },
}

/// Session that records every builder call instead of talking to a
/// database. Each entry point returns the recorded [`Call`].
pub struct MockSession {
    database: String,
    calls: Mutex<Vec<Call>>,
}

impl MockSession {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) -> Call {
        self.calls.lock().push(call.clone());
        call
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new("")
    }
}

impl Session for MockSession {
    type Select = Call;
    type Insert = Call;
    type Update = Call;
    type Delete = Call;

    fn database(&self) -> &str {
        &self.database
    }

    fn select(&self, table: &str, columns: Vec<String>) -> Call {
        self.record(Call::Select {
            table: table.to_owned(),
            columns,
        })
    }

    fn insert_into(&self, table: &str, columns: Vec<String>, values: Vec<RawValue>) -> Call {
        self.record(Call::Insert {
            table: table.to_owned(),
            columns,
            values,
        })
    }

    fn update(&self, table: &str, assignments: Vec<(String, RawValue)>) -> Call {
        self.record(Call::Update {
            table: table.to_owned(),
            assignments,
        })
    }

    fn delete_from(&self, table: &str) -> Call {
        self.record(Call::Delete {
            table: table.to_owned(),
        })
    }
}
