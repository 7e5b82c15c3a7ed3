use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use wrapp_di::types::InstanceId;

/// Group an initializer belongs to
///
/// Used to group the final sequence and to partition identity tracking.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Category {
    Servlet,
    Filter,
    Listener,
    /// Any other initializer - its identities shadow all categories
    Generic,
}
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Servlet => "Servlet",
            Category::Filter => "Filter",
            Category::Listener => "Listener",
            Category::Generic => "Generic",
        })
    }
}

/// The raw component behind an initializer
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum RawSource {
    /// A container managed instance
    Instance(InstanceId),
    /// The name of a bean which is looked up later
    BeanName(String),
}

/// Raw components already claimed by an initializer, per category
#[derive(Debug, Default)]
pub(crate) struct Seen {
    seen: HashMap<Category, HashSet<RawSource>>,
}

impl Seen {
    /// Records `source` under `category`
    ///
    /// Returns false if it was already seen
    pub fn add(&mut self, category: Category, source: RawSource) -> bool {
        if self.contains(category, &source) {
            return false;
        }
        self.seen.entry(category).or_default().insert(source)
    }

    /// True if `source` was recorded under `category`, or under [Category::Generic]
    pub fn contains(&self, category: Category, source: &RawSource) -> bool {
        if category != Category::Generic && self.recorded(category, source) {
            return true;
        }
        self.recorded(Category::Generic, source)
    }

    fn recorded(&self, category: Category, source: &RawSource) -> bool {
        self.seen
            .get(&category)
            .is_some_and(|sources| sources.contains(source))
    }
}
