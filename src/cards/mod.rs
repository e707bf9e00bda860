//! Cards: immutable templates, the registry, run-unique instances, and the
//! built-in catalog.

pub mod catalog;

mod instance;
mod registry;
mod template;

pub use instance::CardInstance;
pub use registry::CardRegistry;
pub use template::{
    CardTemplate, CardTheme, CardType, GroupTag, HandPassive, HandPassiveKind, TemplateId,
};
