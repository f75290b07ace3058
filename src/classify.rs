//! Property-kind classification for "select all structural fields" semantics.
//!
//! A declared kind tag alone cannot tell an embedded complex value apart from
//! a genuine relationship: a navigation property may point at an
//! entity-shaped type that never declares a primary key anywhere in its
//! ancestry, and such a type carries no identity: it is a complex value
//! wearing an entity kind. Classification therefore walks the target's base
//! chain and lets the key declaration, not the kind tag, decide.
//!
//! # Decision table
//!
//! | Property kind | Target              | Structural-or-complex? |
//! |---------------|---------------------|------------------------|
//! | Structural    | any                 | yes                    |
//! | None          | any                 | no                     |
//! | Navigation    | collection          | no                     |
//! | Navigation    | complex type        | yes                    |
//! | Navigation    | entity, key in chain| no (true relationship) |
//! | Navigation    | entity, keyless chain| yes (embedded value)  |
//! | Navigation    | primitive           | no                     |

use crate::schema::{PropertyKind, PropertyTarget, SchemaModel, SchemaProperty, TypeId, TypeKind};

/// Decides whether `property` is emitted under "select all structural/complex
/// fields" semantics.
///
/// `property` must be declared by a type of `model`; target ids are resolved
/// against that model's arena.
pub fn is_structural_or_complex(model: &SchemaModel, property: &SchemaProperty) -> bool {
    match property.kind {
        PropertyKind::Structural => true,
        PropertyKind::None => false,
        PropertyKind::Navigation => match property.target {
            // Collections of related entities are never implicitly flattened
            PropertyTarget::Collection(_) => false,
            PropertyTarget::Named(target) => named_target_is_complex(model, target),
            PropertyTarget::Primitive(_) => false,
        },
    }
}

/// A named navigation target counts as complex if it is declared complex, or
/// if it is entity-shaped but no type in its base chain declares a key.
fn named_target_is_complex(model: &SchemaModel, target: TypeId) -> bool {
    match model.schema_type(target).kind {
        TypeKind::Complex => true,
        TypeKind::Entity => {
            for (_, ty) in model.self_and_ancestors(target) {
                if ty.declares_key {
                    log::debug!(
                        "target '{}' is a relationship (key declared on '{}')",
                        model.schema_type(target).name,
                        ty.name
                    );
                    return false;
                }
            }
            // Root reached without a key: entity-shaped, but no identity
            true
        }
    }
}
