//! Built-in lint rules.
//!
//! Each rule lives in its own file and implements [`Rule`](crate::rule::Rule).
//! The full production catalog is much larger; the rules here are the ones
//! with real machinery behind them (reachability, fixes, version gating).
//! Simple field-presence rules follow the same contract.

mod additional_properties;
mod numeric_bounds;
mod nullable_type;
mod operation_description;
mod operation_id;
mod reference_target;
mod response_content;
mod server_trailing_slash;
mod unused_component;

pub use additional_properties::AdditionalPropertiesRule;
pub use numeric_bounds::NumericBoundsRule;
pub use nullable_type::NullableTypeRule;
pub use operation_description::OperationDescriptionRule;
pub use operation_id::OperationIdRule;
pub use reference_target::ReferenceTargetRule;
pub use response_content::ResponseContentRule;
pub use server_trailing_slash::ServerTrailingSlashRule;
pub use unused_component::UnusedComponentRule;
