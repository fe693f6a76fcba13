//! The ordered set of active function definitions.

use crate::func::def::{FunctionDef, FunctionKind};
use crate::func::error::PlotResult;

/// Owns the functions currently being plotted. Insertion order is z-order
/// and legend order. A rejected add leaves the collection untouched;
/// "replace the plot" is `clear()` followed by fresh adds.
#[derive(Debug, Clone, Default)]
pub struct FunctionCollection {
    defs: Vec<FunctionDef>,
}

impl FunctionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a definition. On error nothing is added.
    pub fn add(
        &mut self,
        kind: FunctionKind,
        a: f64,
        b: f64,
        c: f64,
        color: impl Into<String>,
    ) -> PlotResult<()> {
        let def = FunctionDef::new(kind, a, b, c, color)?;
        self.defs.push(def);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.defs.clear();
    }

    pub fn count(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Read-only view in insertion order.
    pub fn defs(&self) -> &[FunctionDef] {
        &self.defs
    }
}
