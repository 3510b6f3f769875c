//! Components - The Bunwind UI Kit
//!
//! One import path for every kit component. Each name below has exactly one
//! definition in its own unit; this module only re-publishes it.
//!
//! ```ignore
//! use bunwind_gallery::components::{Button, Input, Label};
//! ```
//!
//! The set is closed: [`ComponentName::ALL`] lists everything published here,
//! and a component that is not re-exported simply does not resolve.

mod composite;
mod primitives;
pub mod utils;

pub use composite::alert::{Alert, AlertDescription, AlertTitle, AlertVariant};
pub use composite::dialog::{
    Dialog, DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogState, DialogTitle,
    DialogTrigger,
};
pub use primitives::button::{Button, ButtonColors, ButtonSize, ButtonVariant};
pub use primitives::input::Input;
pub use primitives::label::Label;

use std::fmt;

/// Grouping of published components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentFamily {
    Primitive,
    Dialog,
    Alert,
}

/// Every component published by the kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentName {
    Button,
    Input,
    Label,
    Dialog,
    DialogTrigger,
    DialogContent,
    DialogHeader,
    DialogTitle,
    DialogDescription,
    DialogFooter,
    Alert,
    AlertTitle,
    AlertDescription,
}

impl ComponentName {
    pub const ALL: [ComponentName; 13] = [
        ComponentName::Button,
        ComponentName::Input,
        ComponentName::Label,
        ComponentName::Dialog,
        ComponentName::DialogTrigger,
        ComponentName::DialogContent,
        ComponentName::DialogHeader,
        ComponentName::DialogTitle,
        ComponentName::DialogDescription,
        ComponentName::DialogFooter,
        ComponentName::Alert,
        ComponentName::AlertTitle,
        ComponentName::AlertDescription,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentName::Button => "Button",
            ComponentName::Input => "Input",
            ComponentName::Label => "Label",
            ComponentName::Dialog => "Dialog",
            ComponentName::DialogTrigger => "DialogTrigger",
            ComponentName::DialogContent => "DialogContent",
            ComponentName::DialogHeader => "DialogHeader",
            ComponentName::DialogTitle => "DialogTitle",
            ComponentName::DialogDescription => "DialogDescription",
            ComponentName::DialogFooter => "DialogFooter",
            ComponentName::Alert => "Alert",
            ComponentName::AlertTitle => "AlertTitle",
            ComponentName::AlertDescription => "AlertDescription",
        }
    }

    pub fn family(self) -> ComponentFamily {
        match self {
            ComponentName::Button | ComponentName::Input | ComponentName::Label => {
                ComponentFamily::Primitive
            }
            ComponentName::Dialog
            | ComponentName::DialogTrigger
            | ComponentName::DialogContent
            | ComponentName::DialogHeader
            | ComponentName::DialogTitle
            | ComponentName::DialogDescription
            | ComponentName::DialogFooter => ComponentFamily::Dialog,
            ComponentName::Alert | ComponentName::AlertTitle | ComponentName::AlertDescription => {
                ComponentFamily::Alert
            }
        }
    }

    /// Names belonging to one family, in publication order
    pub fn in_family(family: ComponentFamily) -> impl Iterator<Item = ComponentName> {
        Self::ALL.into_iter().filter(move |name| name.family() == family)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_is_exactly_the_kit() {
        let names: Vec<&str> = ComponentName::ALL.iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Button",
                "Input",
                "Label",
                "Dialog",
                "DialogTrigger",
                "DialogContent",
                "DialogHeader",
                "DialogTitle",
                "DialogDescription",
                "DialogFooter",
                "Alert",
                "AlertTitle",
                "AlertDescription",
            ]
        );
    }

    #[test]
    fn test_names_are_unique() {
        let unique: HashSet<&str> = ComponentName::ALL.iter().map(|n| n.as_str()).collect();
        assert_eq!(unique.len(), ComponentName::ALL.len());
    }

    #[test]
    fn test_families() {
        let primitives: Vec<_> = ComponentName::in_family(ComponentFamily::Primitive).collect();
        assert_eq!(
            primitives,
            vec![ComponentName::Button, ComponentName::Input, ComponentName::Label]
        );
        assert_eq!(ComponentName::in_family(ComponentFamily::Dialog).count(), 7);
        assert_eq!(ComponentName::in_family(ComponentFamily::Alert).count(), 3);
    }

    #[test]
    fn test_published_paths_resolve() {
        // Each registered name is importable from this module
        fn published<T>() -> &'static str {
            std::any::type_name::<T>()
        }

        let paths = [
            published::<Button>(),
            published::<Input>(),
            published::<Label>(),
            published::<Dialog>(),
            published::<DialogTrigger>(),
            published::<DialogContent>(),
            published::<DialogHeader>(),
            published::<DialogTitle>(),
            published::<DialogDescription>(),
            published::<DialogFooter>(),
            published::<Alert>(),
            published::<AlertTitle>(),
            published::<AlertDescription>(),
        ];

        for (path, name) in paths.iter().zip(ComponentName::ALL) {
            assert!(path.ends_with(&format!("::{}", name.as_str())), "{path} vs {name}");
        }
    }
}
