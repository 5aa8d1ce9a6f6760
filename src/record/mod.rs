//! The financial record store and its JSON REST API.
//!
//! This module contains:
//! - The `FinancialRecord` model and the bodies for creating and updating records
//! - Database functions for storing, querying, updating and deleting records
//! - The route handlers for the `/financial-records` API

mod body;
mod core;
mod create;
mod date;
mod db;
mod delete;
mod list;
mod state;
mod update;

pub use core::{FinancialRecord, NewRecord, RecordId, RecordPatch, UserId};
pub use create::create_record_endpoint;
pub use date::parse_record_date;
pub use db::{
    create_record, create_record_table, delete_record, get_record, list_records_by_user,
    update_record,
};
pub use delete::delete_record_endpoint;
pub use list::get_records_by_user_endpoint;
pub use update::update_record_endpoint;

pub(crate) use body::parse_record_id;
