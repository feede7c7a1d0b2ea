//! The [Space] representation of sets of values. A space is either empty,
//! the whole of a type, a constructor applied to component spaces, a finite
//! union, or a single boolean constant. Spaces are immutable trees: the
//! operations of the algebra consume references and produce fresh values.
use std::fmt;

use quill_source::identifier::Identifier;
use quill_tir::tys::TyId;
use quill_utils::{
    smallvec::{smallvec, SmallVec},
    thin_vec::ThinVec,
};

/// An abstract set of values of the subject type, derived from a type or
/// from a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Space {
    /// The empty set. The identity of union and the annihilator of
    /// intersection.
    Empty,

    /// The full set of values inhabiting the given type, unconstrained.
    Ty(TyId),

    /// A constructor pattern within the given type: the head labels which
    /// alternative of the type the space selects, and the component spaces
    /// constrain the constructor payload. Tuples are constructors with no
    /// head. A constructor with a head but no components is a head-only
    /// pattern, covering the whole payload.
    Ctor { ty: TyId, head: Option<Identifier>, spaces: ThinVec<Space> },

    /// A finite union of spaces.
    Disjunct(ThinVec<Space>),

    /// The singleton set of one boolean constant.
    Bool(bool),
}

impl Space {
    /// Check whether this is the empty space.
    pub fn is_empty(&self) -> bool {
        matches!(self, Space::Empty)
    }

    /// Create a constructor space with the given head.
    pub fn ctor(ty: TyId, head: Identifier, spaces: ThinVec<Space>) -> Self {
        Space::Ctor { ty, head: Some(head), spaces }
    }

    /// Create a constructor space for a tuple, which carries no head.
    pub fn tuple(ty: TyId, spaces: ThinVec<Space>) -> Self {
        Space::Ctor { ty, head: None, spaces }
    }

    /// Wrap the given spaces into a disjunction, unpacking empty and
    /// singular lists.
    pub fn disjunct(spaces: ThinVec<Space>) -> Self {
        match spaces.len() {
            0 => Space::Empty,
            1 => spaces.into_iter().next().unwrap(),
            _ => Space::Disjunct(spaces),
        }
    }

    /// Whether [Space::flatten] recurses through this space when it occurs
    /// as a constructor component.
    fn is_flattenable(&self) -> bool {
        matches!(self, Space::Ctor { .. } | Space::Disjunct(_) | Space::Bool(_))
    }

    /// Expand the space into a list of non-disjunctive witnesses whose union
    /// is the original space, for display. Disjunctions concatenate the
    /// flattening of their members; a constructor is rebuilt once per
    /// combination of its components' flat variants; any other space is
    /// already flat.
    ///
    /// The order of the result follows the order of the members, so witness
    /// lists are stable with respect to projection order.
    pub fn flatten(&self) -> SmallVec<[Space; 4]> {
        match self {
            Space::Disjunct(spaces) => spaces.iter().flat_map(|space| space.flatten()).collect(),
            Space::Ctor { ty, head, spaces } => {
                // Multiply the running list of component rows by each
                // component's flat variants in turn.
                let mut rows: Vec<ThinVec<Space>> = vec![ThinVec::new()];

                for space in spaces {
                    let variants = if space.is_flattenable() {
                        space.flatten()
                    } else {
                        smallvec![space.clone()]
                    };

                    rows = rows
                        .into_iter()
                        .flat_map(|row| {
                            variants.iter().map(move |variant| {
                                let mut row = row.clone();
                                row.push(variant.clone());
                                row
                            })
                        })
                        .collect();
                }

                rows.into_iter()
                    .map(|row| Space::Ctor { ty: *ty, head: *head, spaces: row })
                    .collect()
            }
            space => smallvec![space.clone()],
        }
    }

    /// Render the space in its raw, non-normalised form, for debugging.
    pub fn dump(&self) -> String {
        match self {
            Space::Empty => "[EMPTY]".to_owned(),
            Space::Ty(ty) => format!("(_ : {ty:?})"),
            Space::Bool(value) => value.to_string(),
            Space::Ctor { head, spaces, .. } => {
                let head = head.map(|head| format!(".{head}")).unwrap_or_default();
                let spaces = spaces.iter().map(|space| space.dump()).collect::<Vec<_>>();
                format!("{head}({})", spaces.join(", "))
            }
            Space::Disjunct(spaces) => {
                let spaces = spaces.iter().map(|space| space.dump()).collect::<Vec<_>>();
                format!("DISJOIN({})", spaces.join(" | "))
            }
        }
    }
}

/// Renders the space the way a user would write it as a pattern: `_` for a
/// whole type, a leading dot for enum heads, parenthesised comma-separated
/// components, and bare `true`/`false` for the boolean constants.
impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Empty => write!(f, "[EMPTY]"),
            Space::Ty(_) => write!(f, "_"),
            Space::Bool(value) => write!(f, "{value}"),
            Space::Ctor { head, spaces, .. } => {
                if let Some(head) = head {
                    write!(f, ".{head}")?;

                    // Head-only patterns render without parentheses.
                    if spaces.is_empty() {
                        return Ok(());
                    }
                }

                write!(f, "(")?;
                for (index, space) in spaces.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{space}")?;
                }
                write!(f, ")")
            }
            Space::Disjunct(spaces) => {
                for (index, space) in spaces.iter().enumerate() {
                    if index > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{space}")?;
                }
                Ok(())
            }
        }
    }
}
