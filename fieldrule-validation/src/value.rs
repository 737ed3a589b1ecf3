// Runtime field values

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

/// Kind of a value as seen by the dispatcher.
///
/// Only [`Kind::Int`], [`Kind::Str`] and [`Kind::Seq`] can satisfy a rule;
/// the remaining kinds exist so that failures and structural errors can say
/// what they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Signed or unsigned integer that fits in an `i64`
    Int,
    /// Integer outside the `i64` range
    WideInt,
    /// String slice or owned string
    Str,
    /// Sequence of values, each with its own kind
    Seq,
    Bool,
    Char,
    Float,
    Option,
    Map,
    Set,
    Tuple,
    /// Struct with named fields
    Record,
    Enum,
    Unsupported,
}

impl Kind {
    /// Get kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::WideInt => "wide int",
            Kind::Str => "string",
            Kind::Seq => "sequence",
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::Float => "float",
            Kind::Option => "option",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Tuple => "tuple",
            Kind::Record => "struct",
            Kind::Enum => "enum",
            Kind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    Int(i64),
    Str(&'a str),
    Seq(Vec<Value<'a>>),
    /// Any value no rule can be checked against
    Other(Kind),
}

impl Value<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Str(_) => Kind::Str,
            Value::Seq(_) => Kind::Seq,
            Value::Other(kind) => *kind,
        }
    }
}

/// Conversion from a Rust field type into a [`Value`].
///
/// The derive macro requires this for every field that carries a rule
/// string. Fields without rules are never converted.
pub trait FieldValue {
    fn field_value(&self) -> Value<'_>;
}

impl FieldValue for str {
    fn field_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl FieldValue for String {
    fn field_value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn field_value(&self) -> Value<'_> {
        (**self).field_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    fn field_value(&self) -> Value<'_> {
        (**self).field_value()
    }
}

macro_rules! lossless_int {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn field_value(&self) -> Value<'_> {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! bounded_int {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn field_value(&self) -> Value<'_> {
                    i64::try_from(*self)
                        .map(Value::Int)
                        .unwrap_or(Value::Other(Kind::WideInt))
                }
            }
        )*
    };
}

macro_rules! opaque {
    ($kind:expr => $($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn field_value(&self) -> Value<'_> {
                    Value::Other($kind)
                }
            }
        )*
    };
}

lossless_int!(i8, i16, i32, i64, u8, u16, u32);
bounded_int!(isize, i128, u64, u128, usize);
opaque!(Kind::Bool => bool);
opaque!(Kind::Char => char);
opaque!(Kind::Float => f32, f64);

impl<T: FieldValue> FieldValue for [T] {
    fn field_value(&self) -> Value<'_> {
        Value::Seq(self.iter().map(FieldValue::field_value).collect())
    }
}

impl<T: FieldValue, const N: usize> FieldValue for [T; N] {
    fn field_value(&self) -> Value<'_> {
        self.as_slice().field_value()
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn field_value(&self) -> Value<'_> {
        self.as_slice().field_value()
    }
}

impl<T> FieldValue for Option<T> {
    fn field_value(&self) -> Value<'_> {
        Value::Other(Kind::Option)
    }
}

impl<K, V, S> FieldValue for HashMap<K, V, S> {
    fn field_value(&self) -> Value<'_> {
        Value::Other(Kind::Map)
    }
}

impl<K, V> FieldValue for BTreeMap<K, V> {
    fn field_value(&self) -> Value<'_> {
        Value::Other(Kind::Map)
    }
}

impl<T, S> FieldValue for HashSet<T, S> {
    fn field_value(&self) -> Value<'_> {
        Value::Other(Kind::Set)
    }
}

impl<T> FieldValue for BTreeSet<T> {
    fn field_value(&self) -> Value<'_> {
        Value::Other(Kind::Set)
    }
}

macro_rules! tuple_value {
    ($(($($name:ident),+)),*) => {
        $(
            impl<$($name),+> FieldValue for ($($name,)+) {
                fn field_value(&self) -> Value<'_> {
                    Value::Other(Kind::Tuple)
                }
            }
        )*
    };
}

opaque!(Kind::Tuple => ());
tuple_value!((A), (A, B), (A, B, C), (A, B, C, D));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion() {
        assert_eq!(7u8.field_value(), Value::Int(7));
        assert_eq!((-3i32).field_value(), Value::Int(-3));
        assert_eq!(42usize.field_value(), Value::Int(42));
        assert_eq!(u64::MAX.field_value(), Value::Other(Kind::WideInt));
    }

    #[test]
    fn test_string_conversion() {
        let owned = String::from("hello");
        assert_eq!(owned.field_value(), Value::Str("hello"));
        assert_eq!("hi".field_value(), Value::Str("hi"));
        assert_eq!(Box::new(owned.clone()).field_value().kind(), Kind::Str);
    }

    #[test]
    fn test_sequence_conversion() {
        let values = vec![1i64, 2, 3];
        assert_eq!(
            values.field_value(),
            Value::Seq(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );

        let nested = vec![vec!["a".to_string()]];
        let Value::Seq(outer) = nested.field_value() else {
            panic!("expected a sequence");
        };
        assert_eq!(outer[0].kind(), Kind::Seq);
    }

    #[test]
    fn test_opaque_kinds() {
        assert_eq!(true.field_value().kind(), Kind::Bool);
        assert_eq!(1.5f64.field_value().kind(), Kind::Float);
        assert_eq!(Some(3).field_value().kind(), Kind::Option);
        assert_eq!('x'.field_value().kind(), Kind::Char);
    }

    #[test]
    fn test_maps_sets_and_tuples_are_opaque() {
        let map: HashMap<String, i32> = HashMap::from([("a".to_string(), 1)]);
        assert_eq!(map.field_value(), Value::Other(Kind::Map));
        assert_eq!(BTreeMap::<i32, i32>::new().field_value().kind(), Kind::Map);
        assert_eq!(HashSet::from([1]).field_value().kind(), Kind::Set);
        assert_eq!((1, "a").field_value().kind(), Kind::Tuple);
    }
}
