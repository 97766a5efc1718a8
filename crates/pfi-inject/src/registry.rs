//! Shim registry and plugin options.
//!
//! The registry maps a risky member name to the capability categories that
//! need a shim for it, and each category to the module that provides the
//! shim:
//!
//! ```json
//! { "includes": { "Array": "shim/array-includes", "String": "shim/string-includes" } }
//! ```
//!
//! Both levels keep their declaration order; the category order is the
//! candidate order handed to the classifier.

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::jsonc;

/// Category name to module specifier, for one member.
pub type ShimMap = IndexMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShimRegistry {
    members: IndexMap<String, ShimMap>,
}

impl ShimRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bare `{ member: { category: module } }` object.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(source).context("failed to parse polyfill registry JSON")?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let entries = match value {
            Value::Object(entries) => entries,
            other => bail!(
                "polyfill registry must be an object keyed by member name, found {}",
                json_kind(&other)
            ),
        };

        let mut members = IndexMap::with_capacity(entries.len());
        for (member, shims) in entries {
            let shims = match shims {
                Value::Object(shims) => shims,
                other => bail!(
                    "registry entry `{member}` must map category names to module specifiers, found {}",
                    json_kind(&other)
                ),
            };
            let mut map = ShimMap::with_capacity(shims.len());
            for (category, module) in shims {
                match module {
                    Value::String(module) => {
                        map.insert(category, module);
                    }
                    other => bail!(
                        "module specifier for `{member}`.`{category}` must be a string, found {}",
                        json_kind(&other)
                    ),
                }
            }
            members.insert(member, map);
        }

        Ok(ShimRegistry { members })
    }

    /// Builder used by hosts that assemble the registry in code.
    pub fn with_shim(
        mut self,
        member: impl Into<String>,
        category: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        self.members
            .entry(member.into())
            .or_default()
            .insert(category.into(), module.into());
        self
    }

    #[inline]
    pub fn get(&self, member: &str) -> Option<&ShimMap> {
        self.members.get(member)
    }

    pub fn members(&self) -> impl Iterator<Item = (&str, &ShimMap)> {
        self.members.iter().map(|(name, shims)| (name.as_str(), shims))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Plugin options
// =============================================================================

/// Options of the injector plugin as written in a `tsconfig.json`:
///
/// ```json
/// { "compilerOptions": { "plugins": [ { "polluting": { ... } } ] } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PluginOptions {
    pub polluting: ShimRegistry,
}

impl PluginOptions {
    /// Options from one plugin entry. A missing `polluting` key yields an
    /// empty registry.
    pub fn from_value(entry: &Value) -> Result<Self> {
        let polluting = match entry.get("polluting") {
            None | Some(Value::Null) => ShimRegistry::new(),
            Some(value) => {
                ShimRegistry::from_value(value.clone()).context("invalid `polluting` option")?
            }
        };
        Ok(PluginOptions { polluting })
    }

    /// Read the first `compilerOptions.plugins` entry that carries a
    /// `polluting` mapping. Comments and trailing commas are accepted.
    pub fn from_tsconfig_str(source: &str) -> Result<Self> {
        let normalized = jsonc::normalize(source);
        let config: Value =
            serde_json::from_str(&normalized).context("failed to parse tsconfig JSON")?;

        let plugins = match config
            .get("compilerOptions")
            .and_then(|options| options.get("plugins"))
        {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Array(plugins)) => plugins,
            Some(other) => bail!(
                "`compilerOptions.plugins` must be an array, found {}",
                json_kind(other)
            ),
        };

        match plugins.iter().find(|entry| entry.get("polluting").is_some()) {
            Some(entry) => Self::from_value(entry),
            None => Ok(Self::default()),
        }
    }

    pub fn from_tsconfig_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tsconfig: {}", path.display()))?;
        Self::from_tsconfig_str(&source)
            .with_context(|| format!("failed to load plugin options: {}", path.display()))
    }
}
