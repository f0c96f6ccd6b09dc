//! Typed named attributes attached to points and trajectories.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::interpolate_timestamp;

/// Value of a single property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// No value.
    #[default]
    Null,
    /// Integer number.
    Integer(i64),
    /// Floating point number.
    Real(f64),
    /// Text.
    Text(String),
    /// Point in time.
    Timestamp(DateTime<Utc>),
}

impl PropertyValue {
    /// Value at fraction `t` of the way from `self` to `other`.
    ///
    /// Numbers and timestamps are interpolated linearly (integers are rounded). For other values, or when the
    /// variants differ, `self` is returned for `t < 0.5` and `other` otherwise.
    pub fn interpolate(&self, other: &Self, t: f64) -> Self {
        match (self, other) {
            (Self::Real(a), Self::Real(b)) => Self::Real(a + (b - a) * t),
            (Self::Integer(a), Self::Integer(b)) => {
                let (a, b) = (*a as f64, *b as f64);
                Self::Integer((a + (b - a) * t).round() as i64)
            }
            (Self::Timestamp(a), Self::Timestamp(b)) => {
                Self::Timestamp(interpolate_timestamp(*a, *b, t))
            }
            _ if t < 0.5 => self.clone(),
            _ => other.clone(),
        }
    }

    /// Returns the number if the value is [`PropertyValue::Real`] or [`PropertyValue::Integer`].
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the number if the value is [`PropertyValue::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text if the value is [`PropertyValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the timestamp if the value is [`PropertyValue::Timestamp`].
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether the value is [`PropertyValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// Named properties, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    values: BTreeMap<String, PropertyValue>,
}

impl PropertyMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the property with the given name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// Sets the property, returning the previous value if there was one.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Removes the property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.values.remove(name)
    }

    /// Whether the property is set.
    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map has no properties.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Numeric value of the property, see [`PropertyValue::as_real`].
    pub fn real(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(PropertyValue::as_real)
    }

    /// Integer value of the property.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(PropertyValue::as_integer)
    }

    /// Text value of the property.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropertyValue::as_text)
    }

    /// Timestamp value of the property.
    pub fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get(name).and_then(PropertyValue::as_timestamp)
    }

    /// Properties at fraction `t` of the way from `self` to `other`.
    ///
    /// Properties present in both maps are interpolated with [`PropertyValue::interpolate`], properties present
    /// in only one of them are copied.
    pub fn interpolate(&self, other: &Self, t: f64) -> Self {
        let mut values = other.values.clone();
        for (name, value) in &self.values {
            let interpolated = match other.values.get(name) {
                Some(other_value) => value.interpolate(other_value, t),
                None => value.clone(),
            };
            values.insert(name.clone(), interpolated);
        }

        Self { values }
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
