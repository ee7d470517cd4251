// Function registry - placeholder name to expansion function

use std::collections::HashMap;
use std::fmt;

/// Maps a placeholder argument to its replacement text
pub type ExpansionFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Immutable table of expansion functions, keyed by placeholder name
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, ExpansionFn>,
}

impl FunctionRegistry {
    /// Registry with no functions; every placeholder passes through untouched
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&ExpansionFn> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Call the function registered under `name`, if any
    pub fn call(&self, name: &str, arg: &str) -> Option<String> {
        self.get(name).map(|f| f(arg))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}

impl FromIterator<(String, ExpansionFn)> for FunctionRegistry {
    fn from_iter<I: IntoIterator<Item = (String, ExpansionFn)>>(iter: I) -> Self {
        Self {
            functions: iter.into_iter().collect(),
        }
    }
}

/// Collects functions before freezing them into a [`FunctionRegistry`]
#[derive(Default)]
pub struct RegistryBuilder {
    functions: HashMap<String, ExpansionFn>,
}

impl RegistryBuilder {
    /// Register `f` under `name`; a later registration of the same name wins
    pub fn function<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.insert(name, f);
        self
    }

    pub fn insert<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        if self.functions.insert(name.clone(), Box::new(f)).is_some() {
            log::debug!("replacing expansion function `{}`", name);
        }
    }

    pub fn build(self) -> FunctionRegistry {
        FunctionRegistry {
            functions: self.functions,
        }
    }
}
