//! Demo-screen routing for catalog selections.
//!
//! The detail surface presents one demo variant per selected component.
//! Routing is a closed mapping keyed by [`ComponentId`] with an explicit
//! fallback for components that have no demo registered, so an unrouted
//! selection resolves to the "demo not available" surface instead of being
//! matched on its display name. Several components intentionally share one
//! demo: the stack and container components all route to the layout demo,
//! and the two lazy grids route to the grid demo.

use indexmap::IndexMap;
use thiserror::Error;

use gallery_catalog::ComponentId;

/// Errors that can occur when mutating a [`DemoRegistry`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DemoRegistryError {
    /// A demo for this component is already registered.
    #[error("demo for component {id:?} is already registered")]
    DuplicateComponent { id: ComponentId },
}

/// The demo variants the detail surface can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
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
    Layout,
    Grid,
    Link,
    Indicator,
    Progress,
    Gauge,
    /// Fallback for selections with no registered demo.
    Unavailable,
}

impl DemoKind {
    /// Title shown above the demo surface.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            DemoKind::Text => "Text",
            DemoKind::Label => "Label",
            DemoKind::TextField => "TextField",
            DemoKind::SecureField => "SecureField",
            DemoKind::TextEditor => "TextEditor",
            DemoKind::AttributedString => "AttributedString",
            DemoKind::Button => "Button",
            DemoKind::Toggle => "Toggle",
            DemoKind::Slider => "Slider",
            DemoKind::Stepper => "Stepper",
            DemoKind::Picker => "Picker",
            DemoKind::DatePicker => "DatePicker",
            DemoKind::ColorPicker => "ColorPicker",
            DemoKind::Layout => "Layouts",
            DemoKind::Grid => "Grids",
            DemoKind::Link => "Link",
            DemoKind::Indicator => "Indicators & Nav",
            DemoKind::Progress => "ProgressView",
            DemoKind::Gauge => "Gauge",
            DemoKind::Unavailable => "Demo Not Available",
        }
    }
}

const BUILTIN_ROUTES: [(ComponentId, DemoKind); 27] = [
    (ComponentId::Text, DemoKind::Text),
    (ComponentId::Label, DemoKind::Label),
    (ComponentId::TextField, DemoKind::TextField),
    (ComponentId::SecureField, DemoKind::SecureField),
    (ComponentId::TextEditor, DemoKind::TextEditor),
    (ComponentId::AttributedString, DemoKind::AttributedString),
    (ComponentId::Button, DemoKind::Button),
    (ComponentId::Toggle, DemoKind::Toggle),
    (ComponentId::Slider, DemoKind::Slider),
    (ComponentId::Stepper, DemoKind::Stepper),
    (ComponentId::Picker, DemoKind::Picker),
    (ComponentId::DatePicker, DemoKind::DatePicker),
    (ComponentId::ColorPicker, DemoKind::ColorPicker),
    (ComponentId::VStack, DemoKind::Layout),
    (ComponentId::HStack, DemoKind::Layout),
    (ComponentId::ZStack, DemoKind::Layout),
    (ComponentId::LazyVGrid, DemoKind::Grid),
    (ComponentId::LazyHGrid, DemoKind::Grid),
    (ComponentId::ScrollView, DemoKind::Layout),
    (ComponentId::List, DemoKind::Layout),
    (ComponentId::Form, DemoKind::Layout),
    (ComponentId::GroupBox, DemoKind::Layout),
    (ComponentId::NavigationStack, DemoKind::Indicator),
    (ComponentId::TabView, DemoKind::Indicator),
    (ComponentId::Link, DemoKind::Link),
    (ComponentId::ProgressView, DemoKind::Progress),
    (ComponentId::Gauge, DemoKind::Gauge),
];

/// Registry mapping cataloged components to their demo variant.
#[derive(Debug, Clone, Default)]
pub struct DemoRegistry {
    routes: IndexMap<ComponentId, DemoKind>,
}

impl DemoRegistry {
    /// Create a registry with no routes installed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            routes: IndexMap::new(),
        }
    }

    /// Create a registry covering every built-in component.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            routes: BUILTIN_ROUTES.into_iter().collect(),
        }
    }

    /// Install a route for `id`.
    pub fn register(&mut self, id: ComponentId, demo: DemoKind) -> Result<(), DemoRegistryError> {
        if self.routes.contains_key(&id) {
            return Err(DemoRegistryError::DuplicateComponent { id });
        }
        self.routes.insert(id, demo);
        Ok(())
    }

    /// Remove the route for `id`, returning the demo it pointed at.
    pub fn deregister(&mut self, id: ComponentId) -> Option<DemoKind> {
        self.routes.shift_remove(&id)
    }

    /// Resolve the demo for a selection, falling back to
    /// [`DemoKind::Unavailable`] when nothing is registered.
    #[must_use]
    pub fn demo_for(&self, id: ComponentId) -> DemoKind {
        self.routes.get(&id).copied().unwrap_or(DemoKind::Unavailable)
    }

    /// Returns `true` if a demo is registered for `id`.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.routes.contains_key(&id)
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` when no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
