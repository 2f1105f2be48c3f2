//! Record mapping for Tabula.
//!
//! Records describe their members through [`Structure`] (usually via the
//! [`structure!`] macro) and their table binding through [`Record`]. On
//! top of that this crate provides:
//!
//! - schema discovery with a per-shape [`SchemaCache`],
//! - by-name field access through embedding ([`get_field`], [`get_field_mut`]),
//! - bulk operations ([`fields`], [`dirty_fields`], [`set_fields`],
//!   [`load_from_map`], [`copy_fields`], [`copy_set_fields`]),
//! - primary-key descriptors and storage-session touchpoints.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod structure;

pub mod accessor;
pub mod config;
pub mod error;
pub mod ops;
pub mod primary_key;
pub mod record;
pub mod schema;
pub mod session;

pub use accessor::{get_field, get_field_mut};
pub use config::{DiscoveryConfig, DuplicatePolicy};
pub use error::RecordError;
pub use ops::{copy_fields, copy_set_fields, dirty_fields, fields, load_from_map, set_fields};
pub use primary_key::{KeyGenerator, PrimaryKey};
pub use record::Record;
pub use schema::{shape_key, Schema, SchemaCache, ShapeKey};
pub use session::{
    escape_columns, new_delete, new_insert, new_select, new_update, qualified_table, Session,
};
pub use structure::{Member, MemberMut, Structure};
