//! Built-in component catalog for gallery.
//!
//! Supplies the compiled-in table of demoable components. The table is the
//! authoritative data set for a build: same contents, same order, on every
//! fetch. Icon values are opaque tokens the presentation layer resolves
//! against its own asset set.

use gallery_catalog::{CatalogSource, Category, ComponentDescriptor, ComponentId, FetchError};

/// Data source backed by the compiled-in component table.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Create the built-in source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The full component table in display order.
    #[must_use]
    pub fn components() -> Vec<ComponentDescriptor> {
        use Category::{Buttons, Indicators, Layout, Navigation, TextInputs};

        vec![
            // Text & inputs
            ComponentDescriptor::new(
                ComponentId::Text,
                "Text",
                "A view that displays one or more lines of read-only text.",
                TextInputs,
                "text.alignleft",
            ),
            ComponentDescriptor::new(
                ComponentId::Label,
                "Label",
                "A standard label for user interface items, consisting of an icon with a title.",
                TextInputs,
                "tag",
            ),
            ComponentDescriptor::new(
                ComponentId::TextField,
                "TextField",
                "A control that displays an editable text interface.",
                TextInputs,
                "character.cursor.ibeam",
            ),
            ComponentDescriptor::new(
                ComponentId::SecureField,
                "SecureField",
                "A control into which the user securely enters private text.",
                TextInputs,
                "lock",
            ),
            ComponentDescriptor::new(
                ComponentId::TextEditor,
                "TextEditor",
                "A view that can display and edit long-form text.",
                TextInputs,
                "doc.text",
            ),
            ComponentDescriptor::new(
                ComponentId::AttributedString,
                "AttributedString",
                "A string with associated attributes for rich text.",
                TextInputs,
                "text.quote",
            ),
            // Buttons & controls
            ComponentDescriptor::new(
                ComponentId::Button,
                "Button",
                "A control that initiates an action.",
                Buttons,
                "button.programmable",
            ),
            ComponentDescriptor::new(
                ComponentId::Toggle,
                "Toggle",
                "A control that toggles between on and off states.",
                Buttons,
                "switch.2",
            ),
            ComponentDescriptor::new(
                ComponentId::Slider,
                "Slider",
                "A control for selecting a value from a bounded linear range.",
                Buttons,
                "slider.horizontal.3",
            ),
            ComponentDescriptor::new(
                ComponentId::Stepper,
                "Stepper",
                "A control for incrementing and decrementing a value.",
                Buttons,
                "plus.forwardslash.minus",
            ),
            ComponentDescriptor::new(
                ComponentId::Picker,
                "Picker",
                "A control for selecting from a set of mutually exclusive values.",
                Buttons,
                "list.bullet",
            ),
            ComponentDescriptor::new(
                ComponentId::DatePicker,
                "DatePicker",
                "A control for selecting an absolute date.",
                Buttons,
                "calendar",
            ),
            ComponentDescriptor::new(
                ComponentId::ColorPicker,
                "ColorPicker",
                "A control used to select a color from the system color picker UI.",
                Buttons,
                "paintpalette",
            ),
            // Layout & containers
            ComponentDescriptor::new(
                ComponentId::VStack,
                "VStack",
                "A view that arranges its subviews in a vertical line.",
                Layout,
                "square.split.1x2",
            ),
            ComponentDescriptor::new(
                ComponentId::HStack,
                "HStack",
                "A view that arranges its subviews in a horizontal line.",
                Layout,
                "square.split.2x1",
            ),
            ComponentDescriptor::new(
                ComponentId::ZStack,
                "ZStack",
                "A view that overlays its subviews, aligning them in both axes.",
                Layout,
                "square.stack.3d.down.right",
            ),
            ComponentDescriptor::new(
                ComponentId::LazyVGrid,
                "LazyVGrid",
                "A container view that grows vertically, creating items only as needed.",
                Layout,
                "square.grid.3x2",
            ),
            ComponentDescriptor::new(
                ComponentId::LazyHGrid,
                "LazyHGrid",
                "A container view that grows horizontally, creating items only as needed.",
                Layout,
                "square.grid.2x2",
            ),
            ComponentDescriptor::new(
                ComponentId::ScrollView,
                "ScrollView",
                "A scrollable view.",
                Layout,
                "scroll",
            ),
            ComponentDescriptor::new(
                ComponentId::List,
                "List",
                "A container that presents rows of data arranged in a single column.",
                Layout,
                "list.bullet.rectangle",
            ),
            ComponentDescriptor::new(
                ComponentId::Form,
                "Form",
                "A container for grouping controls used for data entry, such as in settings or inspectors.",
                Layout,
                "list.clipboard",
            ),
            ComponentDescriptor::new(
                ComponentId::GroupBox,
                "GroupBox",
                "A stylized view, with an optional label, that visually collects a logical group of content.",
                Layout,
                "rectangle.on.rectangle",
            ),
            // Navigation
            ComponentDescriptor::new(
                ComponentId::NavigationStack,
                "NavigationStack",
                "A view that displays a root view and enables you to present additional views over the root view.",
                Navigation,
                "sidebar.left",
            ),
            ComponentDescriptor::new(
                ComponentId::TabView,
                "TabView",
                "A view that switches between multiple child views using interactive user interface elements.",
                Navigation,
                "rectangle.split.3x1",
            ),
            ComponentDescriptor::new(
                ComponentId::Link,
                "Link",
                "A control for navigating to a URL.",
                Navigation,
                "link",
            ),
            // Indicators
            ComponentDescriptor::new(
                ComponentId::ProgressView,
                "ProgressView",
                "A view that shows the progress of a task towards completion.",
                Indicators,
                "hourglass",
            ),
            ComponentDescriptor::new(
                ComponentId::Gauge,
                "Gauge",
                "A view that shows a value within a range.",
                Indicators,
                "gauge",
            ),
        ]
    }
}

impl CatalogSource for BuiltinCatalog {
    async fn fetch_all(&self) -> Result<Vec<ComponentDescriptor>, FetchError> {
        Ok(Self::components())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn fetch_returns_the_full_table_in_order() {
        let source = BuiltinCatalog::new();
        let fetched = source.fetch_all().await.expect("builtin fetch never fails");
        assert_eq!(fetched, BuiltinCatalog::components());
        assert_eq!(fetched.first().map(|component| component.id), Some(ComponentId::Text));
        assert_eq!(fetched.last().map(|component| component.id), Some(ComponentId::Gauge));
    }

    #[test]
    fn identifiers_and_names_are_unique() {
        let components = BuiltinCatalog::components();
        let ids: HashSet<ComponentId> =
            components.iter().map(|component| component.id).collect();
        let names: HashSet<&str> =
            components.iter().map(|component| component.name.as_str()).collect();
        assert_eq!(ids.len(), components.len());
        assert_eq!(names.len(), components.len());
    }

    #[test]
    fn every_category_is_populated() {
        let components = BuiltinCatalog::components();
        for category in Category::ALL {
            assert!(
                components.iter().any(|component| component.category == category),
                "category {category:?} has no entries"
            );
        }
    }

    #[test]
    fn table_covers_the_expected_component_count() {
        assert_eq!(BuiltinCatalog::components().len(), 27);
    }
}
