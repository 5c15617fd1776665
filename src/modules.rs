use serde::{Deserialize, Serialize};

/// A loaded module (bundle) as reported by the host application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Bare module name, e.g. `FooBundle`.
    pub name: String,
    /// Namespace root holding the module's classes, e.g. `Acme\Foo`.
    pub namespace: String,
}

impl ModuleInfo {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Source of the module list the bundle-prefix strategy derives its map from.
///
/// The list is read once, when the strategy is built.
pub trait ModuleEnumerator {
    /// Modules in load order.
    fn modules(&self) -> Vec<ModuleInfo>;
}

impl ModuleEnumerator for [ModuleInfo] {
    fn modules(&self) -> Vec<ModuleInfo> {
        self.to_vec()
    }
}

impl ModuleEnumerator for Vec<ModuleInfo> {
    fn modules(&self) -> Vec<ModuleInfo> {
        self.clone()
    }
}

impl<T: ModuleEnumerator + ?Sized> ModuleEnumerator for &T {
    fn modules(&self) -> Vec<ModuleInfo> {
        (**self).modules()
    }
}
