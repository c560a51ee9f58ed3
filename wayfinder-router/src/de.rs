use serde::{
    de::{
        self,
        value::{BorrowedStrDeserializer, SeqDeserializer},
        Deserializer, Error as DeError, Visitor,
    },
    forward_to_deserialize_any,
};

use crate::{path::ParamsIter, Params, Value};

macro_rules! unsupported_type {
    ($trait_fn:ident, $name:expr) => {
        fn $trait_fn<V>(self, _: V) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'de>,
        {
            Err(de::Error::custom(concat!("unsupported type: ", $name)))
        }
    };
}

macro_rules! parse_single_value {
    ($trait_fn:ident) => {
        fn $trait_fn<V>(self, visitor: V) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'de>,
        {
            if self.params.len() != 1 {
                Err(de::value::Error::custom(format!(
                    "wrong number of parameters: {} expected 1",
                    self.params.len()
                )))
            } else {
                ValueDeserializer {
                    value: &self.params[0],
                }
                .$trait_fn(visitor)
            }
        }
    };
}

/// String values are parsed; numeric and boolean values go through `deserialize_any` and let the
/// visitor apply its own range checks.
macro_rules! parse_value {
    ($trait_fn:ident, $visit_fn:ident, $tp:tt) => {
        fn $trait_fn<V>(self, visitor: V) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'de>,
        {
            match self.value {
                Value::Str(s) => {
                    let v = s.parse().map_err(|_| {
                        de::value::Error::custom(format!("can not parse {:?} to a {}", s, $tp))
                    })?;

                    visitor.$visit_fn(v)
                }
                _ => self.deserialize_any(visitor),
            }
        }
    };
}

/// Deserializes the values bound by a path pattern.
pub(crate) struct ParamsDeserializer<'de> {
    params: &'de Params,
}

impl<'de> ParamsDeserializer<'de> {
    pub(crate) fn new(params: &'de Params) -> Self {
        ParamsDeserializer { params }
    }

    fn check_len(&self, len: usize) -> Result<(), de::value::Error> {
        if self.params.len() < len {
            Err(de::value::Error::custom(format!(
                "wrong number of parameters: {} expected {}",
                self.params.len(),
                len
            )))
        } else {
            Ok(())
        }
    }
}

impl<'de> Deserializer<'de> for ParamsDeserializer<'de> {
    type Error = de::value::Error;

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(ParamsMap {
            params: self.params.iter(),
            current: None,
        })
    }

    fn deserialize_struct<V>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(
        self,
        _: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_tuple<V>(self, len: usize, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.check_len(len)?;
        visitor.visit_seq(ParamsSeq {
            params: self.params.iter(),
        })
    }

    fn deserialize_tuple_struct<V>(
        self,
        _: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_tuple(len, visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        if self.params.is_empty() {
            Err(de::value::Error::custom("expected at least one parameters"))
        } else {
            ValueDeserializer {
                value: &self.params[0],
            }
            .deserialize_enum(name, variants, visitor)
        }
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(ParamsSeq {
            params: self.params.iter(),
        })
    }

    unsupported_type!(deserialize_any, "'any'");
    unsupported_type!(deserialize_option, "Option<T>");
    unsupported_type!(deserialize_identifier, "identifier");
    unsupported_type!(deserialize_ignored_any, "ignored_any");

    parse_single_value!(deserialize_bool);
    parse_single_value!(deserialize_i8);
    parse_single_value!(deserialize_i16);
    parse_single_value!(deserialize_i32);
    parse_single_value!(deserialize_i64);
    parse_single_value!(deserialize_u8);
    parse_single_value!(deserialize_u16);
    parse_single_value!(deserialize_u32);
    parse_single_value!(deserialize_u64);
    parse_single_value!(deserialize_f32);
    parse_single_value!(deserialize_f64);
    parse_single_value!(deserialize_str);
    parse_single_value!(deserialize_string);
    parse_single_value!(deserialize_bytes);
    parse_single_value!(deserialize_byte_buf);
    parse_single_value!(deserialize_char);
}

struct ParamsMap<'de> {
    params: ParamsIter<'de>,
    current: Option<&'de Value>,
}

impl<'de> de::MapAccess<'de> for ParamsMap<'de> {
    type Error = de::value::Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.params.next() {
            Some((key, value)) => {
                self.current = Some(value);
                Ok(Some(seed.deserialize(BorrowedStrDeserializer::new(key))?))
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.current.take() {
            Some(value) => seed.deserialize(ValueDeserializer { value }),
            None => Err(de::value::Error::custom("unexpected item")),
        }
    }
}

struct ParamsSeq<'de> {
    params: ParamsIter<'de>,
}

impl<'de> de::SeqAccess<'de> for ParamsSeq<'de> {
    type Error = de::value::Error;

    fn next_element_seed<U>(&mut self, seed: U) -> Result<Option<U::Value>, Self::Error>
    where
        U: de::DeserializeSeed<'de>,
    {
        match self.params.next() {
            Some((_, value)) => Ok(Some(seed.deserialize(ValueDeserializer { value })?)),
            None => Ok(None),
        }
    }
}

/// Deserializes one bound value.
///
/// Remainder captures deserialize as sequences of strings.
struct ValueDeserializer<'de> {
    value: &'de Value,
}

impl<'de> Deserializer<'de> for ValueDeserializer<'de> {
    type Error = de::value::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Str(s) => visitor.visit_borrowed_str(s),
            Value::Int(n) => visitor.visit_i32(*n),
            Value::Long(n) => visitor.visit_i64(*n),
            Value::UInt(n) => visitor.visit_u64(*n),
            Value::Bool(b) => visitor.visit_bool(*b),
            Value::Segments(segs) => {
                let mut seq = SeqDeserializer::new(segs.iter().map(String::as_str));
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
        }
    }

    parse_value!(deserialize_bool, visit_bool, "bool");
    parse_value!(deserialize_i8, visit_i8, "i8");
    parse_value!(deserialize_i16, visit_i16, "i16");
    parse_value!(deserialize_i32, visit_i32, "i32");
    parse_value!(deserialize_i64, visit_i64, "i64");
    parse_value!(deserialize_u8, visit_u8, "u8");
    parse_value!(deserialize_u16, visit_u16, "u16");
    parse_value!(deserialize_u32, visit_u32, "u32");
    parse_value!(deserialize_u64, visit_u64, "u64");
    parse_value!(deserialize_f32, visit_f32, "f32");
    parse_value!(deserialize_f64, visit_f64, "f64");
    parse_value!(deserialize_char, visit_char, "char");

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Str(s) => visitor.visit_borrowed_str(s),
            other => visitor.visit_string(other.to_string()),
        }
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(
        self,
        _: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Str(s) => visitor.visit_enum(ValueEnum { value: s }),
            other => Err(de::value::Error::custom(format!(
                "can not use {} value as enum variant",
                other.kind()
            ))),
        }
    }

    unsupported_type!(deserialize_map, "map");
    unsupported_type!(deserialize_identifier, "identifier");

    forward_to_deserialize_any! {
        bytes byte_buf unit_struct seq tuple tuple_struct struct
    }
}

struct ValueEnum<'de> {
    value: &'de str,
}

impl<'de> de::EnumAccess<'de> for ValueEnum<'de> {
    type Error = de::value::Error;
    type Variant = UnitVariant;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant), Self::Error>
    where
        V: de::DeserializeSeed<'de>,
    {
        Ok((
            seed.deserialize(BorrowedStrDeserializer::new(self.value))?,
            UnitVariant,
        ))
    }
}

struct UnitVariant;

impl<'de> de::VariantAccess<'de> for UnitVariant {
    type Error = de::value::Error;

    fn unit_variant(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn newtype_variant_seed<T>(self, _seed: T) -> Result<T::Value, Self::Error>
    where
        T: de::DeserializeSeed<'de>,
    {
        Err(de::value::Error::custom("not supported"))
    }

    fn tuple_variant<V>(self, _len: usize, _visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(de::value::Error::custom("not supported"))
    }

    fn struct_variant<V>(self, _: &'static [&'static str], _: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(de::value::Error::custom("not supported"))
    }
}
