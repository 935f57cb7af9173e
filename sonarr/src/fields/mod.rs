//! Dynamic field marshaling
//!
//! Sonarr describes provider-specific settings as a list of `{name, value}`
//! pairs whose values are only loosely typed. Resources keep those settings
//! as typed, presence-tracked attributes on a record struct instead. This
//! module moves values between the two: writers copy API output onto a
//! record, readers harvest API input from one.
//!
//! Records opt in by implementing [`Fielded`], normally through the
//! [`fielded!`](crate::fielded) macro:
//!
//! ```ignore
//! struct Notification {
//!     api_key: StringValue,
//!     field_tags: SetValue,
//! }
//!
//! sonarr::fielded!(Notification { api_key as "apiKey", field_tags as "fieldTags" });
//! ```
//!
//! Names are matched ASCII case-insensitively, so a record must not declare
//! two names that differ only in case.

mod names;
mod read;
mod write;

pub use names::{to_api, to_local};
pub use read::{
    read_bool, read_fields, read_float64, read_int64, read_int_set, read_string,
    read_string_set,
};
pub use write::{
    write_bool, write_fields, write_float64, write_int64, write_int_set, write_string,
    write_string_set,
};

use thiserror::Error;
use tfplug::{AttributeType, BoolValue, Float64Value, Int64Value, SetValue, StringValue};

/// Binding failures; these are provider bugs, not user errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("no field named '{0}' on record")]
    NotFound(String),

    #[error("field '{name}' holds {actual}, expected {expected}")]
    KindMismatch {
        name: String,
        expected: AttributeType,
        actual: AttributeType,
    },

    #[error("field '{name}' cannot take a {actual} payload, expected {expected}")]
    UnexpectedPayload {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("field '{0}' has no value")]
    Absent(String),

    #[error("field '{name}' has unsupported kind {kind}")]
    Unsupported { name: String, kind: AttributeType },
}

impl FieldError {
    fn kind_mismatch(name: &str, expected: AttributeType, actual: AttributeType) -> Self {
        FieldError::KindMismatch {
            name: name.to_string(),
            expected,
            actual,
        }
    }
}

/// Shared view of a record field
#[derive(Debug, Clone, Copy)]
pub enum FieldRef<'a> {
    String(&'a StringValue),
    Bool(&'a BoolValue),
    Int64(&'a Int64Value),
    Float64(&'a Float64Value),
    Set(&'a SetValue),
}

impl FieldRef<'_> {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            FieldRef::String(_) => AttributeType::String,
            FieldRef::Bool(_) => AttributeType::Bool,
            FieldRef::Int64(_) => AttributeType::Int64,
            FieldRef::Float64(_) => AttributeType::Float64,
            FieldRef::Set(set) => set.attribute_type(),
        }
    }
}

/// Writable view of a record field
#[derive(Debug)]
pub enum FieldMut<'a> {
    String(&'a mut StringValue),
    Bool(&'a mut BoolValue),
    Int64(&'a mut Int64Value),
    Float64(&'a mut Float64Value),
    Set(&'a mut SetValue),
}

impl FieldMut<'_> {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            FieldMut::String(_) => AttributeType::String,
            FieldMut::Bool(_) => AttributeType::Bool,
            FieldMut::Int64(_) => AttributeType::Int64,
            FieldMut::Float64(_) => AttributeType::Float64,
            FieldMut::Set(set) => set.attribute_type(),
        }
    }
}

/// Implemented by every wrapper type a record field may have
pub trait AsField {
    fn as_field(&self) -> FieldRef<'_>;
    fn as_field_mut(&mut self) -> FieldMut<'_>;
}

macro_rules! impl_as_field {
    ($($wrapper:ty => $variant:ident),* $(,)?) => {
        $(
            impl AsField for $wrapper {
                fn as_field(&self) -> FieldRef<'_> {
                    FieldRef::$variant(self)
                }

                fn as_field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::$variant(self)
                }
            }
        )*
    };
}

impl_as_field! {
    StringValue => String,
    BoolValue => Bool,
    Int64Value => Int64,
    Float64Value => Float64,
    SetValue => Set,
}

/// A record whose fields can be addressed by name at runtime
pub trait Fielded {
    /// Declared field names, in declaration order
    fn field_names(&self) -> &'static [&'static str];

    /// Looks up a field by its exact declared name
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}

/// Generates a [`Fielded`] impl from a list of struct fields
///
/// Each field is declared under its identifier unless renamed with
/// `field as "name"`.
#[macro_export]
macro_rules! fielded {
    (@name $field:ident $name:literal) => {
        $name
    };
    (@name $field:ident) => {
        stringify!($field)
    };
    ($record:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::fields::Fielded for $record {
            fn field_names(&self) -> &'static [&'static str] {
                &[$($crate::fielded!(@name $field $($name)?)),*]
            }

            fn field(&self, name: &str) -> Option<$crate::fields::FieldRef<'_>> {
                $(
                    if name == $crate::fielded!(@name $field $($name)?) {
                        return Some($crate::fields::AsField::as_field(&self.$field));
                    }
                )*
                None
            }

            fn field_mut(&mut self, name: &str) -> Option<$crate::fields::FieldMut<'_>> {
                $(
                    if name == $crate::fielded!(@name $field $($name)?) {
                        return Some($crate::fields::AsField::as_field_mut(&mut self.$field));
                    }
                )*
                None
            }
        }
    };
}

fn resolve<R: Fielded + ?Sized>(record: &R, lookup: &str) -> Result<&'static str, FieldError> {
    record
        .field_names()
        .iter()
        .copied()
        .find(|declared| declared.eq_ignore_ascii_case(lookup))
        .ok_or_else(|| FieldError::NotFound(lookup.to_string()))
}

/// Finds the field whose declared name matches `lookup`, ignoring ASCII case
pub fn find_field<'r, R: Fielded + ?Sized>(
    record: &'r R,
    lookup: &str,
) -> Result<FieldRef<'r>, FieldError> {
    find_declared(record, lookup).map(|(_, field)| field)
}

/// Like [`find_field`], also returning the name the field was declared under
pub(crate) fn find_declared<'r, R: Fielded + ?Sized>(
    record: &'r R,
    lookup: &str,
) -> Result<(&'static str, FieldRef<'r>), FieldError> {
    let declared = resolve(record, lookup)?;
    record
        .field(declared)
        .map(|field| (declared, field))
        .ok_or_else(|| FieldError::NotFound(lookup.to_string()))
}

pub fn find_field_mut<'r, R: Fielded + ?Sized>(
    record: &'r mut R,
    lookup: &str,
) -> Result<FieldMut<'r>, FieldError> {
    let declared = resolve(&*record, lookup)?;
    record
        .field_mut(declared)
        .ok_or_else(|| FieldError::NotFound(lookup.to_string()))
}
