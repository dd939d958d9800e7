// Selection validation: every generator is gated on the classified columns

use crate::classify::ColumnClasses;
use crate::parser::ast::Selection;

/// 3D axis names checked against the classified column set.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAxes {
    pub x: String,
    pub y: String,
    pub z: Option<String>,
}

/// A column choice is usable when it is set, non-empty, and a member of the
/// classified column set. Anything else means "nothing selected yet" — the
/// initial state of every selector — and must short-circuit to "no chart"
/// rather than run a generator with an undefined axis.
pub fn resolve_column(selected: Option<&str>, classes: &ColumnClasses) -> Option<String> {
    let name = selected?;
    if name.is_empty() || !classes.contains(name) {
        return None;
    }
    Some(name.to_string())
}

/// X and Y are required for 3D charts. Z is optional; unset or unknown Z
/// contributes 0 to every row downstream.
pub fn resolve_axes(selection: &Selection, classes: &ColumnClasses) -> Option<ResolvedAxes> {
    let x = resolve_column(selection.x.as_deref(), classes)?;
    let y = resolve_column(selection.y.as_deref(), classes)?;
    let z = resolve_column(selection.z.as_deref(), classes);
    Some(ResolvedAxes { x, y, z })
}
