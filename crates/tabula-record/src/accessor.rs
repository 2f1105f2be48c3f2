//! By-name field lookup through the embedding graph.
//!
//! Direct fields are searched first, then embedded structures and
//! polymorphic references in declaration order, recursively. This is the
//! same order discovery lists names in, so a duplicated name always
//! resolves to its first listed occurrence.

use tabula_core::{Field, Name};

use crate::error::RecordError;
use crate::structure::{Member, MemberMut, Structure};

fn find<'a>(members: Vec<Member<'a>>, name: &str) -> Option<&'a dyn Field> {
    let mut nested = Vec::new();
    for member in members {
        match member {
            Member::Field(n, field) if n == name => return Some(field),
            Member::Embedded(_, inner) => nested.push(inner.members()),
            Member::Reference(_, Some(inner)) => nested.push(inner.members()),
            _ => {}
        }
    }
    nested.into_iter().find_map(|members| find(members, name))
}

fn find_mut<'a>(members: Vec<MemberMut<'a>>, name: &str) -> Option<&'a mut dyn Field> {
    let mut nested = Vec::new();
    for member in members {
        match member {
            MemberMut::Field(n, field) if n == name => return Some(field),
            MemberMut::Embedded(_, inner) => nested.push(inner.members_mut()),
            MemberMut::Reference(_, Some(inner)) => nested.push(inner.members_mut()),
            _ => {}
        }
    }
    nested.into_iter().find_map(|members| find_mut(members, name))
}

fn not_found(name: &str) -> RecordError {
    RecordError::NameNotFound {
        name: Name::from(name),
    }
}

/// Locate the field registered as `name`.
pub fn get_field<'a, S>(record: &'a S, name: &str) -> Result<&'a dyn Field, RecordError>
where
    S: Structure + ?Sized,
{
    find(record.members(), name).ok_or_else(|| not_found(name))
}

/// Locate the field registered as `name`, mutably.
pub fn get_field_mut<'a, S>(record: &'a mut S, name: &str) -> Result<&'a mut dyn Field, RecordError>
where
    S: Structure + ?Sized,
{
    find_mut(record.members_mut(), name).ok_or_else(|| not_found(name))
}
