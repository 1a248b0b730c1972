//! Serde support, enabled by the `serde` feature.
//!
//! Both [`Integer`] and [`Natural`] serialize as base-10 strings, so values
//! of any size survive formats whose native integers are bounded. They
//! deserialize from such a string or from any native integer.

use crate::integer::Integer;
use crate::lib::fmt;
use crate::natural::Natural;
use crate::radix;
use alloc::string::ToString;
use serde_core::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde_core::ser::{Serialize, Serializer};

impl Serialize for Integer {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Serialize for Natural {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = Integer;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string of decimal digits")
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> Result<Integer, E> {
        Ok(Integer::from(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> Result<Integer, E> {
        Ok(Integer::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Integer, E>
    where
        E: de::Error,
    {
        let mut buffer = itoa::Buffer::new();
        self.visit_str(buffer.format(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Integer, E>
    where
        E: de::Error,
    {
        let mut buffer = itoa::Buffer::new();
        self.visit_str(buffer.format(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Integer, E>
    where
        E: de::Error,
    {
        radix::parse(value, 10).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Integer {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Integer, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntegerVisitor)
    }
}

impl<'de> Deserialize<'de> for Natural {
    fn deserialize<D>(deserializer: D) -> Result<Natural, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (magnitude, positive) = Integer::deserialize(deserializer)?.into_parts();
        if positive {
            Ok(magnitude)
        } else {
            Err(de::Error::custom("expected a nonnegative integer"))
        }
    }
}
