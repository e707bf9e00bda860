//! Card registry for template lookup.

use rustc_hash::FxHashMap;

use super::template::{CardTemplate, TemplateId};

/// Registry of card templates.
///
/// Stores every template the run can use and provides fast lookup by
/// `TemplateId`.
///
/// ## Example
///
/// ```
/// use emberdeck::cards::{CardRegistry, CardTemplate, CardType, TemplateId};
/// use emberdeck::effects::Effect;
///
/// let mut registry = CardRegistry::new();
/// registry.register(
///     CardTemplate::new(TemplateId::new(1), "Strike", 1, CardType::Attack)
///         .with_effect(Effect::damage(6)),
/// );
///
/// assert_eq!(registry.get(TemplateId::new(1)).unwrap().name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    templates: FxHashMap<TemplateId, CardTemplate>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    ///
    /// Panics if a template with the same ID already exists.
    pub fn register(&mut self, template: CardTemplate) {
        if self.templates.contains_key(&template.id) {
            panic!("Template with ID {:?} already registered", template.id);
        }
        self.templates.insert(template.id, template);
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&CardTemplate> {
        self.templates.get(&id)
    }

    /// Get a template by ID, panicking if not found.
    #[must_use]
    pub fn get_unchecked(&self, id: TemplateId) -> &CardTemplate {
        self.templates
            .get(&id)
            .unwrap_or_else(|| panic!("Template {id} not registered"))
    }

    /// Iterate over registered template IDs.
    pub fn ids(&self) -> impl Iterator<Item = TemplateId> + '_ {
        self.templates.keys().copied()
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
