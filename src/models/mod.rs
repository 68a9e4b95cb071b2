//! Domain models

pub mod enquiry;

pub use enquiry::{
    Enquiry, EnquiryId, EnquiryRequest, EnquiryRow, EnquiryStatus, EnquirySummary, NewEnquiry,
    ValidationError, MAX_GUESTS_PER_GROUP,
};
