//! Resolver and rendering configuration.

use serde::Deserialize;

/// Default builder root expression.
pub const DEFAULT_ROOT: &str = "io.dagger.client.Dagger.dag()";
/// Default qualified name of the kind enumeration.
pub const DEFAULT_KIND_ENUM: &str = "io.dagger.client.TypeDefKind";
/// Default qualified name of the type-definition class.
pub const DEFAULT_TYPE_DEF_CLASS: &str = "io.dagger.client.TypeDef";
/// Default maximum array/generic nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Configuration for the type-descriptor resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum array/generic nesting depth below the top-level type.
    pub max_depth: usize,
}

impl ResolverConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Options controlling the textual form of a type-definition expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Expression evaluating to the root schema-builder handle.
    pub root: String,
    /// Qualified name of the kind enumeration.
    pub kind_enum: String,
    /// Qualified name of the type-definition class, used for argument objects.
    pub type_def_class: String,
    /// Whether enum/scalar/object descriptions are rendered.
    pub include_descriptions: bool,
}

impl RenderOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            kind_enum: DEFAULT_KIND_ENUM.to_string(),
            type_def_class: DEFAULT_TYPE_DEF_CLASS.to_string(),
            include_descriptions: false,
        }
    }

    /// Sets the root expression.
    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the kind enumeration name.
    #[must_use]
    pub fn kind_enum(mut self, kind_enum: impl Into<String>) -> Self {
        self.kind_enum = kind_enum.into();
        self
    }

    /// Sets the type-definition class name.
    #[must_use]
    pub fn type_def_class(mut self, class: impl Into<String>) -> Self {
        self.type_def_class = class.into();
        self
    }

    /// Enables or disables rendering of descriptions.
    #[must_use]
    pub fn include_descriptions(mut self, include: bool) -> Self {
        self.include_descriptions = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}
