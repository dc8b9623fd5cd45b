use serde_json::Value;

/// String-keyed mapping of arbitrary values.
pub type Record = serde_json::Map<String, Value>;

/// Either a leaf value or a nested list of the same shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub name: String,
    pub connected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    pub lines: Vec<String>,
    pub services: Vec<ServiceStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Paths relative to the source root, in copy order.
    pub copied: Vec<String>,
    pub directories_created: usize,
}
