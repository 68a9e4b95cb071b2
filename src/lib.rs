//! Pachena resort booking service.
//!
//! JSON backend for the resort site: public rates and quotations, the booking
//! enquiry form, and the staff dashboard for following enquiries up.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod session;

use std::sync::Arc;

use axum::Router;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::{ContactInfo, StaffConfig};
use crate::db::EnquiryStore;
use crate::pricing::PricingCatalog;
use crate::session::SessionCache;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EnquiryStore>,
    pub catalog: Arc<PricingCatalog>,
    pub sessions: SessionCache,
    pub staff: Arc<StaffConfig>,
    pub contact: Arc<ContactInfo>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn EnquiryStore>,
        catalog: PricingCatalog,
        staff: StaffConfig,
        contact: ContactInfo,
    ) -> Self {
        Self {
            store,
            catalog: Arc::new(catalog),
            sessions: SessionCache::new(staff.session_ttl),
            staff: Arc::new(staff),
            contact: Arc::new(contact),
        }
    }
}

/// Build the full application with middleware
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
