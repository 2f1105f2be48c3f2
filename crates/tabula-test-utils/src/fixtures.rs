//! Reusable record fixtures.
//!
//! - [`User`]: three nullable text fields keyed by `Id`.
//! - [`Account`]: direct fields plus an embedded [`Timestamps`].
//! - [`Membership`]: shares `FirstName` with [`User`], keyed by `ModelId`.
//! - [`Envelope`]: a sequence number plus an arbitrary sub-record.
//! - [`Wide`]: one field of every typed column, for benches.

use tabula_field::{
    Bool, Date, Decimal, Document, Float64, Int64, NullDecimal, NullText, NullTimestamp, Text,
    TimeOfDay, Timestamp,
};
use tabula_record::{structure, PrimaryKey, Record};

#[derive(Default)]
pub struct User {
    pub id: NullText,
    pub first_name: NullText,
    pub org: NullText,
}

structure! {
    User {
        field id => "Id",
        field first_name => "FirstName",
        field org => "Org",
    }
}

impl Record for User {
    fn table_name(&self) -> &str {
        "users"
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::single("Id")
    }
}

#[derive(Default)]
pub struct Timestamps {
    pub created: Timestamp,
    pub modified: NullTimestamp,
}

structure! {
    Timestamps {
        field created => "Created",
        field modified => "Modified",
    }
}

#[derive(Default)]
pub struct Account {
    pub id: Int64,
    pub first_name: NullText,
    pub stamps: Timestamps,
}

structure! {
    Account {
        field id => "Id",
        field first_name => "FirstName",
        embed stamps => "Timestamps",
    }
}

impl Record for Account {
    fn table_name(&self) -> &str {
        "accounts"
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::single("Id")
    }
}

#[derive(Default)]
pub struct Membership {
    pub model_id: NullText,
    pub first_name: NullText,
}

structure! {
    Membership {
        field model_id => "ModelId",
        field first_name => "FirstName",
    }
}

impl Record for Membership {
    fn table_name(&self) -> &str {
        "memberships"
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::single("ModelId")
    }
}

#[derive(Default)]
pub struct Envelope {
    pub seq: Int64,
    pub payload: Option<Box<dyn Record>>,
}

impl Envelope {
    pub fn wrapping(payload: impl Record + 'static) -> Self {
        Self {
            seq: Int64::default(),
            payload: Some(Box::new(payload)),
        }
    }
}

structure! {
    Envelope {
        field seq => "Seq",
        reference payload => "Payload",
    }
}

impl Record for Envelope {
    fn table_name(&self) -> &str {
        "envelopes"
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::single("Seq")
    }
}

#[derive(Default)]
pub struct Wide {
    pub id: Int64,
    pub name: Text,
    pub active: Bool,
    pub ratio: Float64,
    pub born: Date,
    pub wakes: TimeOfDay,
    pub price: Decimal,
    pub discount: NullDecimal,
    pub meta: Document,
    pub stamps: Timestamps,
}

structure! {
    Wide {
        field id => "Id",
        field name => "Name",
        field active => "Active",
        field ratio => "Ratio",
        field born => "Born",
        field wakes => "Wakes",
        field price => "Price",
        field discount => "Discount",
        field meta => "Meta",
        embed stamps => "Timestamps",
    }
}

impl Record for Wide {
    fn table_name(&self) -> &str {
        "wide"
    }

    fn primary_key(&self) -> PrimaryKey {
        PrimaryKey::single("Id")
    }
}
