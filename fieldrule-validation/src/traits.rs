// Validation traits

use crate::{Error, FieldValue, Kind, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Static metadata for one declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: &'static str,

    /// Rule string, empty when the field carries none
    pub rules: &'static str,

    /// Whether the field is `pub`
    pub exported: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, rules: &'static str, exported: bool) -> Self {
        Self {
            name,
            rules,
            exported,
        }
    }
}

/// A struct with named fields, described by a static field table.
///
/// Usually implemented by `#[derive(Validate)]`.
pub trait Record {
    /// Fields in declaration order
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Value of the field at `index` in [`Record::fields`].
    ///
    /// Only called for exported fields that carry rules.
    fn value(&self, index: usize) -> Value<'_>;
}

/// Structural view of a value handed to `validate`
pub enum Shape<'a> {
    Record(&'a dyn Record),
    /// Anything that is not a struct with named fields
    Value(Kind),
}

/// Types that can be handed to `validate`
pub trait Inspect {
    fn shape(&self) -> Shape<'_>;
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

macro_rules! scalar_shape {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Value(self.field_value().kind())
                }
            }
        )*
    };
}

scalar_shape!(
    str, String, bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize
);

impl<T> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(Kind::Seq)
    }
}

impl<T> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(Kind::Seq)
    }
}

impl<T> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(Kind::Option)
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(Kind::Map)
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(Kind::Map)
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(Kind::Set)
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(Kind::Set)
    }
}

/// Trait for validatable types
///
/// Implemented for everything that implements [`Inspect`].
pub trait Validate {
    /// Validate the value and return every failing field
    fn validate(&self) -> Result<(), Error>;
}

impl<T: Inspect> Validate for T {
    fn validate(&self) -> Result<(), Error> {
        crate::validate(self)
    }
}
