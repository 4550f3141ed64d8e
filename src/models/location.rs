//! Care unit location models
//!
//! This module contains the `Location` record describing a care unit
//! (address, schedule, offered services, contact data) and the `Specialty`
//! record derived from the service tags across all locations.

use crate::models::traits::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Opening hours of a care unit, as free-text display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Monday to Friday hours
    pub weekdays: String,
    /// Saturday hours
    pub saturday: String,
    /// Sunday hours, when the unit publishes them
    pub sunday: Option<String>,
}

/// Contact channels of a care unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Short-dial phone number
    pub phone: String,
    /// Service experience mailbox
    pub email: String,
}

/// A titled group of services shown on the location detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSection {
    /// Section heading
    pub title: String,
    /// Services listed under the heading
    pub services: Vec<String>,
    /// Whether the section is flagged as newly offered
    pub is_new: bool,
}

/// Full breakdown of the services offered at a care unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedServices {
    /// Consultation specialties
    pub consultations: Vec<String>,
    /// Diagnostic and procedural services
    pub other_services: Vec<String>,
    /// Recently added services
    pub new_services: Vec<String>,
    /// Extra titled sections (rehabilitation, imaging, ...)
    pub additional_sections: Vec<ServiceSection>,
}

/// A care unit location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Stable identifier, e.g. `el-dorado`
    pub id: String,
    /// Full display name of the unit
    pub name: String,
    /// Street address
    pub address: String,
    /// Address with building/floor detail, HTML line breaks included
    pub full_address: Option<String>,
    /// Building the unit sits in
    pub building: Option<String>,
    /// Floor within the building
    pub floor: Option<String>,
    /// Office or suite
    pub office: Option<String>,
    /// Opening hours
    pub schedule: Schedule,
    /// Service tags; the specialty derivation groups locations by these
    pub services: Vec<String>,
    /// Full service breakdown for the detail page
    pub detailed_services: Option<DetailedServices>,
    /// Contact channels
    pub contact: Contact,
    /// Whether this is a premium unit
    pub is_premium: bool,
    /// Photo of the unit
    pub image_url: Option<String>,
}

impl CatalogRecord for Location {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A medical specialty derived from location service tags.
///
/// Specialties are never stored; they are recomputed from the locations on
/// each call, so `available_at` always reflects the current backing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    /// Synthetic sequential identifier (`specialty-1`, `specialty-2`, ...)
    pub id: String,
    /// Verbatim service tag the specialty was derived from
    pub name: String,
    /// Display description
    pub description: String,
    /// Ids of the locations offering this specialty
    pub available_at: Vec<String>,
}

impl CatalogRecord for Specialty {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Footer rendition of a location's schedule, with day-range labels applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSchedule {
    /// Weekday hours prefixed with the weekday label
    pub weekdays: String,
    /// Saturday hours prefixed with the Saturday label
    pub saturday: String,
}
