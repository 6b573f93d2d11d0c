//! Site records: contact inquiries, the service catalog and status checks.

mod catalog;
mod contact;
mod status;

pub use catalog::{CatalogService, Service, fallback_services};
pub use contact::{ContactInquiry, ContactService, InquiryStatus, NewContactInquiry};
pub use status::{NewStatusCheck, StatusCheck, StatusService};

/// Maximum number of records returned by list endpoints.
pub(crate) const LIST_LIMIT: usize = 1000;
