use std::str;

use getset::Getters;
use log::warn;
use regex::bytes::Regex;

use super::CategorizeError;

/// One `name,pattern` row of the categories file, before compilation. Both
/// fields are kept as raw bytes, the pattern has to be UTF-8 to compile.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub name: Vec<u8>,
    pub pattern: Vec<u8>,
}

impl CategoryRecord {
    pub fn new(name: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> CategoryRecord {
        CategoryRecord {
            name: name.as_ref().to_vec(),
            pattern: pattern.as_ref().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Getters)]
pub struct Category {
    #[getset(get = "pub")]
    name: Vec<u8>,
    pattern: Regex,
}

impl Category {
    pub fn new(name: impl AsRef<[u8]>, pattern: &[u8]) -> Result<Category, CategorizeError> {
        let name = name.as_ref().to_vec();
        let pattern = match str::from_utf8(pattern) {
            Ok(pattern) => pattern,
            Err(_) => {
                return Err(CategorizeError::NonUtf8Pattern {
                    name: String::from_utf8_lossy(&name).into_owned(),
                })
            },
        };

        match Regex::new(pattern) {
            Ok(pattern) => Ok(Category { name, pattern }),
            Err(source) => Err(CategorizeError::InvalidPattern {
                name: String::from_utf8_lossy(&name).into_owned(),
                source,
            }),
        }
    }

    /// Unanchored search over the raw field, so non UTF-8 bytes never fail a match.
    pub fn is_match(&self, value: &[u8]) -> bool {
        self.pattern.is_match(value)
    }
}

impl TryFrom<CategoryRecord> for Category {
    type Error = CategorizeError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        Category::new(record.name, &record.pattern)
    }
}

/// Categories in match priority order.
#[derive(Debug, Clone, Default)]
pub struct CategoryList {
    categories: Vec<Category>,
}

impl CategoryList {
    /// Compiles every record in order. A record whose pattern does not compile
    /// is logged and left out, the rest keep their relative order.
    pub fn from_records(records: impl IntoIterator<Item = CategoryRecord>) -> CategoryList {
        let categories = records
            .into_iter()
            .filter_map(|record| match Category::try_from(record) {
                Ok(category) => Some(category),
                Err(err) => {
                    warn!("skipping category, err={}", err);
                    None
                },
            })
            .collect();

        CategoryList { categories }
    }

    /// First category, in list order, whose pattern matches `value`.
    pub fn find_match(&self, value: &[u8]) -> Option<&Category> {
        self.categories.iter().find(|category| category.is_match(value))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
