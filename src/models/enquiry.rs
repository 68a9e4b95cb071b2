//! Booking enquiry models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pricing::catalog::PricingCatalog;

/// Server-assigned enquiry identifier
pub type EnquiryId = i64;

/// Most adults or children a single enquiry may book.
pub const MAX_GUESTS_PER_GROUP: u32 = 20;

/// Follow-up status of an enquiry.
///
/// Staff may move an enquiry between any two statuses; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl EnquiryStatus {
    pub const ALL: [EnquiryStatus; 4] = [
        EnquiryStatus::Pending,
        EnquiryStatus::Confirmed,
        EnquiryStatus::Completed,
        EnquiryStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "pending",
            EnquiryStatus::Confirmed => "confirmed",
            EnquiryStatus::Completed => "completed",
            EnquiryStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnquiryStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnquiryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidStatus(s.to_string()))
    }
}

/// Caller-side validation failures, shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your full name")]
    MissingName,

    #[error("Please enter a contact phone number")]
    MissingPhone,

    #[error("Please specify at least one adult or child")]
    NoGuests,

    #[error("At most {max} {group} can be booked per enquiry")]
    TooManyGuests { group: &'static str, max: u32 },

    #[error("Booking date {date} is in the past")]
    DateInPast { date: NaiveDate },

    #[error("Unknown package '{0}'")]
    UnknownPackage(String),

    #[error("Invalid status '{0}' (expected pending, confirmed, completed or cancelled)")]
    InvalidStatus(String),
}

/// Booking enquiry as stored in the `enquiries` table
#[derive(Debug, Clone, FromRow)]
pub struct EnquiryRow {
    pub id: EnquiryId,
    pub name: String,
    pub phone: String,
    pub booking_date: NaiveDate,
    pub num_adults: i32,
    pub num_children: i32,
    pub package: String,
    pub status: String,
    pub follow_up_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Booking enquiry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub name: String,
    pub phone: String,
    pub booking_date: NaiveDate,
    pub num_adults: u32,
    pub num_children: u32,
    pub package: String,
    pub status: EnquiryStatus,
    pub follow_up_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<EnquiryRow> for Enquiry {
    type Error = String;

    fn try_from(row: EnquiryRow) -> Result<Self, Self::Error> {
        let num_adults = u32::try_from(row.num_adults)
            .map_err(|_| format!("negative num_adults ({})", row.num_adults))?;
        let num_children = u32::try_from(row.num_children)
            .map_err(|_| format!("negative num_children ({})", row.num_children))?;
        let status = row
            .status
            .parse::<EnquiryStatus>()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            booking_date: row.booking_date,
            num_adults,
            num_children,
            package: row.package,
            status,
            follow_up_notes: row.follow_up_notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Enquiry form submission, as received from the customer
#[derive(Debug, Clone, Deserialize)]
pub struct EnquiryRequest {
    pub name: String,
    pub phone: String,
    pub booking_date: NaiveDate,
    #[serde(default)]
    pub num_adults: u32,
    #[serde(default)]
    pub num_children: u32,
    pub package: String,
}

/// A validated enquiry, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnquiry {
    pub name: String,
    pub phone: String,
    pub booking_date: NaiveDate,
    pub num_adults: u32,
    pub num_children: u32,
    pub package: String,
}

impl EnquiryRequest {
    /// Check the submission against the form rules and the current catalog.
    ///
    /// `today` is the earliest bookable date. Name and phone are trimmed.
    pub fn validate(
        self,
        today: NaiveDate,
        catalog: &PricingCatalog,
    ) -> Result<NewEnquiry, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        if self.num_adults == 0 && self.num_children == 0 {
            return Err(ValidationError::NoGuests);
        }
        if self.num_adults > MAX_GUESTS_PER_GROUP {
            return Err(ValidationError::TooManyGuests {
                group: "adults",
                max: MAX_GUESTS_PER_GROUP,
            });
        }
        if self.num_children > MAX_GUESTS_PER_GROUP {
            return Err(ValidationError::TooManyGuests {
                group: "children",
                max: MAX_GUESTS_PER_GROUP,
            });
        }
        if self.booking_date < today {
            return Err(ValidationError::DateInPast {
                date: self.booking_date,
            });
        }
        if !catalog.is_bookable(&self.package) {
            return Err(ValidationError::UnknownPackage(self.package));
        }

        Ok(NewEnquiry {
            name: name.to_string(),
            phone: phone.to_string(),
            booking_date: self.booking_date,
            num_adults: self.num_adults,
            num_children: self.num_children,
            package: self.package,
        })
    }
}

/// Headline numbers for the staff dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnquirySummary {
    pub total_enquiries: usize,
    pub pending: usize,
    pub total_adults: u64,
    pub total_children: u64,
}

impl EnquirySummary {
    pub fn from_enquiries(enquiries: &[Enquiry]) -> Self {
        enquiries.iter().fold(Self::default(), |mut summary, e| {
            summary.total_enquiries += 1;
            if e.status == EnquiryStatus::Pending {
                summary.pending += 1;
            }
            summary.total_adults += u64::from(e.num_adults);
            summary.total_children += u64::from(e.num_children);
            summary
        })
    }
}
