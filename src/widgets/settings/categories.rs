//! Groups a flat descriptor list into the nested category tree shown by the
//! settings panel.

use super::descriptor::{InputDescriptor, InputKind};

/// One node of the settings category tree. The root has no name and never
/// gets a main attribute.
#[derive(Debug, Clone, Default)]
pub struct Category {
    pub name: Option<String>,
    /// Descriptors belonging directly to this category, in input order.
    pub description: Vec<InputDescriptor>,
    /// Child categories, in first-encounter order.
    pub categories: Vec<Category>,
    /// The boolean toggle representing the whole category, when the
    /// document provides one whose name matches the category's.
    pub main_attribute: Option<InputDescriptor>,
}

impl Category {
    fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Lowercase and strip spaces, so "Drop Shadow" matches "dropshadow".
fn normalized(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Build the category tree from the flat descriptor list.
///
/// Each distinct category path maps to exactly one node, created lazily on
/// first encounter; sibling lookup is a case-sensitive linear scan, so paths
/// differing only in case produce separate siblings. A bool descriptor whose
/// normalized name matches its leaf category's name becomes that category's
/// `main_attribute` (a later match replaces an earlier one); everything else
/// is appended to the leaf's `description`.
pub fn compute_categories(descriptors: &[InputDescriptor]) -> Category {
    let mut root = Category::default();

    for descriptor in descriptors {
        let leaf = descend(&mut root, &descriptor.categories);

        let is_main_attribute = match &leaf.name {
            Some(name) => {
                descriptor.kind == InputKind::Bool
                    && normalized(&descriptor.name) == normalized(name)
            }
            None => false,
        };

        if is_main_attribute {
            leaf.main_attribute = Some(descriptor.clone());
        } else {
            leaf.description.push(descriptor.clone());
        }
    }

    root
}

/// Walk the path from `node`, creating missing children along the way.
fn descend<'a>(mut node: &'a mut Category, path: &[String]) -> &'a mut Category {
    for segment in path {
        let index = match node
            .categories
            .iter()
            .position(|child| child.name.as_deref() == Some(segment.as_str()))
        {
            Some(index) => index,
            None => {
                node.categories.push(Category::named(segment));
                node.categories.len() - 1
            }
        };
        node = &mut node.categories[index];
    }
    node
}
