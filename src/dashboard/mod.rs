//! Dashboard module
//!
//! Provides the page where a signed in user sees their records, the total of
//! those records, and a form for creating and editing records.

mod cache;
mod form;
mod handlers;
mod identity;
mod view;

pub use cache::RecordCache;
pub use handlers::{
    create_record_from_form, delete_record_from_dashboard, get_dashboard_page,
    get_edit_record_form, update_record_from_form,
};
pub use identity::UserIdentity;
