//! Property-based tests for endpoint translation and exclusion fragments.

#[path = "properties/endpoint_translation.rs"]
mod endpoint_translation;
#[path = "properties/exclusions.rs"]
mod exclusions;
