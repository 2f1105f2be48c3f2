//! Structural description of records.
//!
//! Rust has no runtime reflection, so every mapped type registers its
//! members explicitly by implementing [`Structure`], usually through the
//! [`structure!`](crate::structure!) macro. Discovery and the accessor
//! walk these descriptions instead of the type's layout.

use std::any::TypeId;

use tabula_core::Field;

use crate::record::Record;

/// One registered member of a structure, borrowed shared.
pub enum Member<'a> {
    /// A mapped field.
    Field(&'static str, &'a dyn Field),
    /// An embedded aggregate whose fields are mapped as if declared here.
    Embedded(&'static str, &'a dyn Structure),
    /// A polymorphic sub-record. `None` contributes no fields.
    Reference(&'static str, Option<&'a dyn Record>),
    /// A member that is declared but not mapped.
    Ignored(&'static str),
}

/// One registered member of a structure, borrowed mutably.
pub enum MemberMut<'a> {
    /// A mapped field.
    Field(&'static str, &'a mut dyn Field),
    /// An embedded aggregate.
    Embedded(&'static str, &'a mut dyn Structure),
    /// A polymorphic sub-record.
    Reference(&'static str, Option<&'a mut dyn Record>),
    /// A member that is declared but not mapped.
    Ignored(&'static str),
}

impl Member<'_> {
    /// The registered member name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Field(name, _)
            | Self::Embedded(name, _)
            | Self::Reference(name, _)
            | Self::Ignored(name) => name,
        }
    }
}

impl MemberMut<'_> {
    /// The registered member name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Field(name, _)
            | Self::Embedded(name, _)
            | Self::Reference(name, _)
            | Self::Ignored(name) => name,
        }
    }
}

/// A type whose members can be enumerated in declaration order.
///
/// Implementations must return the same members, with the same names and
/// kinds, from [`members`](Structure::members) and
/// [`members_mut`](Structure::members_mut).
///
/// Discovery lists a structure's own fields before those of its embeds and
/// references, whatever order they are declared in.
pub trait Structure: Send + Sync {
    /// Identity of the concrete type, used as the discovery cache key.
    fn shape(&self) -> TypeId;

    /// Human-readable name of the concrete type.
    fn shape_name(&self) -> &'static str;

    /// Members in declaration order.
    fn members(&self) -> Vec<Member<'_>>;

    /// Members in declaration order, mutably.
    fn members_mut(&mut self) -> Vec<MemberMut<'_>>;
}

/// Implement [`Structure`] for a struct by listing its members.
///
/// Each entry is `kind member => "Name"`, where `kind` is one of:
///
/// - `field`: the member implements [`Field`](tabula_core::Field).
/// - `embed`: the member implements [`Structure`].
/// - `reference`: the member is an `Option<Box<dyn Record>>`.
/// - `ignore`: the member is declared but not mapped.
///
/// Listing an `embed` before a `field` does not put the embed's fields
/// first in discovery order.
///
/// ```ignore
/// structure! {
///     User {
///         field id => "Id",
///         field first_name => "FirstName",
///         embed stamps => "Timestamps",
///     }
/// }
/// ```
#[macro_export]
macro_rules! structure {
    (@ref field $e:expr, $name:literal) => {
        $crate::Member::Field($name, &$e)
    };
    (@ref embed $e:expr, $name:literal) => {
        $crate::Member::Embedded($name, &$e)
    };
    (@ref reference $e:expr, $name:literal) => {
        $crate::Member::Reference($name, $e.as_deref().map(|r| r as &dyn $crate::Record))
    };
    (@ref ignore $e:expr, $name:literal) => {
        $crate::Member::Ignored($name)
    };
    (@mut field $e:expr, $name:literal) => {
        $crate::MemberMut::Field($name, &mut $e)
    };
    (@mut embed $e:expr, $name:literal) => {
        $crate::MemberMut::Embedded($name, &mut $e)
    };
    (@mut reference $e:expr, $name:literal) => {
        $crate::MemberMut::Reference(
            $name,
            $e.as_deref_mut().map(|r| r as &mut dyn $crate::Record),
        )
    };
    (@mut ignore $e:expr, $name:literal) => {
        $crate::MemberMut::Ignored($name)
    };
    ($ty:ty { $($kind:ident $member:ident => $name:literal),* $(,)? }) => {
        impl $crate::Structure for $ty {
            fn shape(&self) -> ::std::any::TypeId {
                ::std::any::TypeId::of::<Self>()
            }

            fn shape_name(&self) -> &'static str {
                ::std::any::type_name::<Self>()
            }

            fn members(&self) -> ::std::vec::Vec<$crate::Member<'_>> {
                ::std::vec![$($crate::structure!(@ref $kind self.$member, $name)),*]
            }

            fn members_mut(&mut self) -> ::std::vec::Vec<$crate::MemberMut<'_>> {
                ::std::vec![$($crate::structure!(@mut $kind self.$member, $name)),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_field::{Int64, NullText};

    #[derive(Default)]
    struct Point {
        x: Int64,
        label: NullText,
        scratch: u8,
    }

    structure! {
        Point {
            field x => "X",
            field label => "Label",
            ignore scratch => "Scratch",
        }
    }

    #[test]
    fn members_follow_declaration_order() {
        let p = Point::default();
        let names: Vec<_> = p.members().iter().map(Member::name).collect();
        assert_eq!(names, ["X", "Label", "Scratch"]);
        assert_eq!(p.scratch, 0);
        assert_eq!(p.shape(), TypeId::of::<Point>());
    }

    #[test]
    fn members_mut_reach_the_fields() {
        let mut p = Point::default();
        for member in p.members_mut() {
            if let MemberMut::Field("X", f) = member {
                f.scan(7i64.into()).unwrap();
            }
        }
        assert_eq!(*p.x.get(), 7);
        assert!(!p.label.is_set());
    }
}
