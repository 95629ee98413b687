use serde::{Deserialize, Serialize};

use crate::Category;

/// Identifies one demoable component in the catalog.
///
/// Identifiers double as the routing key for demo dispatch, so every
/// component a data source can emit has a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    Text,
    Label,
    TextField,
    SecureField,
    TextEditor,
    AttributedString,
    Button,
    Toggle,
    Slider,
    Stepper,
    Picker,
    DatePicker,
    ColorPicker,
    VStack,
    HStack,
    ZStack,
    LazyVGrid,
    LazyHGrid,
    ScrollView,
    List,
    Form,
    GroupBox,
    NavigationStack,
    TabView,
    Link,
    ProgressView,
    Gauge,
}

/// Describes one demoable UI element: display name, blurb, grouping, and an
/// opaque icon token the presentation layer resolves.
///
/// Descriptors are created once by a data source and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub id: ComponentId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub icon: String,
}

impl ComponentDescriptor {
    /// Create a new [`ComponentDescriptor`] from its parts.
    #[must_use]
    pub fn new(
        id: ComponentId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category,
            icon: icon.into(),
        }
    }
}

// Identity follows `id` alone; display fields do not participate.
impl PartialEq for ComponentDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentDescriptor {}

impl std::hash::Hash for ComponentDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_identifier() {
        let a = ComponentDescriptor::new(
            ComponentId::Text,
            "Text",
            "A read-only line of text.",
            Category::TextInputs,
            "text.alignleft",
        );
        let b = ComponentDescriptor::new(
            ComponentId::Text,
            "Text (renamed)",
            "A different blurb.",
            Category::TextInputs,
            "text.quote",
        );
        let c = ComponentDescriptor::new(
            ComponentId::Toggle,
            "Text",
            "A read-only line of text.",
            Category::TextInputs,
            "text.alignleft",
        );

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn descriptors_parse_from_external_data() {
        let parsed: ComponentDescriptor = serde_json::from_str(
            r#"{
                "id": "Gauge",
                "name": "Gauge",
                "description": "A view that shows a value within a range.",
                "category": "Indicators",
                "icon": "gauge"
            }"#,
        )
        .expect("well-formed descriptor");
        assert_eq!(parsed.id, ComponentId::Gauge);
        assert_eq!(parsed.category, Category::Indicators);
        assert_eq!(parsed.icon, "gauge");
    }
}
