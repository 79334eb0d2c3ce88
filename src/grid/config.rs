//! Grid configuration resolution.
//!
//! A container's column/row count lives in two custom style properties.
//! Computed-style lookups are not free, and the values cannot change
//! while the authoring surface is live, so resolved configurations are
//! cached by container identity until explicitly invalidated.

use crate::error::GridError;
use crate::surface::{PropertyMap, Surface, parse_cell_value};
use crate::types::{GridConfig, NodeId};
use std::collections::HashMap;
use tracing::debug;

/// Resolves and caches [`GridConfig`]s per grid container.
#[derive(Debug)]
pub struct GridConfigResolver {
    cache: HashMap<NodeId, GridConfig>,
    fallback: GridConfig,
}

impl GridConfigResolver {
    pub fn new(fallback: GridConfig) -> Self {
        Self {
            cache: HashMap::new(),
            fallback,
        }
    }

    /// Resolve the grid dimensions for `container`. Never fails: missing
    /// or non-numeric properties fall back to the default configuration,
    /// field by field.
    pub fn resolve(
        &mut self,
        surface: &dyn Surface,
        container: NodeId,
        props: &PropertyMap,
    ) -> GridConfig {
        if let Some(cached) = self.cache.get(&container) {
            return *cached;
        }

        let columns = read_dimension(surface, container, &props.grid_columns);
        let rows = read_dimension(surface, container, &props.grid_rows);
        if columns.is_none() || rows.is_none() {
            debug!(
                error = %GridError::ConfigurationMissing { container },
                "substituting default grid dimensions"
            );
        }

        let resolved = GridConfig::new(
            columns.unwrap_or(self.fallback.columns),
            rows.unwrap_or(self.fallback.rows),
        );
        self.cache.insert(container, resolved);
        resolved
    }

    /// The cached configuration, if `container` has been resolved.
    pub fn cached(&self, container: NodeId) -> Option<GridConfig> {
        self.cache.get(&container).copied()
    }

    /// Drop one container's cached configuration (cleanup path).
    pub fn invalidate(&mut self, container: NodeId) {
        self.cache.remove(&container);
    }

    /// Drop every cached configuration (full re-render of the surface).
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for GridConfigResolver {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

/// A dimension parses only to a positive integer; anything else is
/// unresolvable.
fn read_dimension(surface: &dyn Surface, container: NodeId, name: &str) -> Option<i32> {
    surface
        .property(container, name)
        .as_deref()
        .and_then(parse_cell_value)
        .filter(|&value| value >= 1)
}
