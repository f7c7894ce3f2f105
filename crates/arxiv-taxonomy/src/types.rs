//! Core data types for the arXiv category taxonomy.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A single arXiv category, e.g. `cs.LG` / `Machine Learning`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    /// Short identifier such as `cs.LG`.
    pub id: String,
    /// Human-readable name such as `Machine Learning`.
    pub name: String,
}

impl Category {
    /// Build a category from an identifier and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<(&str, &str)> for Category {
    fn from((id, name): (&str, &str)) -> Self {
        Self::new(id, name)
    }
}

/// A top-level subject and the categories listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Subject label, e.g. `Computer Science`.
    pub name: String,
    /// Categories in document order.
    pub categories: Vec<Category>,
}

/// Subject → categories mapping, in document order.
///
/// Subjects keep the position at which they first appeared on the page and
/// each subject name occurs at most once. Serializes as a JSON object whose
/// keys follow that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    subjects: Vec<Subject>,
}

impl Taxonomy {
    /// Create an empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a subject with an empty category list.
    ///
    /// A subject that already exists keeps its position but loses the
    /// categories collected so far.
    pub fn insert_subject(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self.subjects.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.categories.clear(),
            None => self.subjects.push(Subject {
                name,
                categories: Vec::new(),
            }),
        }
    }

    /// Append a category to `subject`, creating the subject if needed.
    pub fn push_category(&mut self, subject: &str, category: Category) {
        if let Some(existing) = self.subjects.iter_mut().find(|s| s.name == subject) {
            existing.categories.push(category);
            return;
        }
        self.subjects.push(Subject {
            name: subject.to_string(),
            categories: vec![category],
        });
    }

    /// Categories listed under `subject`.
    pub fn get(&self, subject: &str) -> Option<&[Category]> {
        self.subjects
            .iter()
            .find(|s| s.name == subject)
            .map(|s| s.categories.as_slice())
    }

    /// Subject names in document order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.name.as_str())
    }

    /// Iterate over `(subject, categories)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Category])> {
        self.subjects
            .iter()
            .map(|s| (s.name.as_str(), s.categories.as_slice()))
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// True when no subject was found.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Total number of categories across all subjects.
    pub fn category_count(&self) -> usize {
        self.subjects.iter().map(|s| s.categories.len()).sum()
    }

    /// Find the subject and category for an identifier such as `cs.LG`.
    pub fn find_category(&self, id: &str) -> Option<(&str, &Category)> {
        self.subjects.iter().find_map(|s| {
            s.categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| (s.name.as_str(), c))
        })
    }

    /// Keep only the named subject. Returns `None` when it is not present.
    pub fn retain_subject(self, subject: &str) -> Option<Taxonomy> {
        let found = self.subjects.into_iter().find(|s| s.name == subject)?;
        Some(Taxonomy {
            subjects: vec![found],
        })
    }
}

impl Serialize for Taxonomy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.subjects.len()))?;
        for subject in &self.subjects {
            map.serialize_entry(&subject.name, &subject.categories)?;
        }
        map.end()
    }
}
