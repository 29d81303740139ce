//! Individual style settings with flexible formats.
//!
//! Colours can be written in three ways:
//!
//! ```json5
//! {
//!   // A named colour
//!   fg: "red",
//!   // A 256 colour palette index
//!   bg: 16,
//!   // An index with the named colour to use on 8 colour terminals
//!   bg: { code: 16, fallback: "white" },
//! }
//! ```
//!
//! Margins are either a number of columns or `"auto"` to centre the menu.

use std::fmt;

use climenu_style::{ColourRequest, NamedColour, StyleError};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A colour as written in a configuration file.
///
/// # Examples
///
/// ```
/// use climenu_config::ColourSetting;
///
/// let colour: ColourSetting = serde_json::from_str(r#""red""#).unwrap();
/// assert_eq!(colour, ColourSetting::name("red"));
///
/// let colour: ColourSetting = serde_json::from_str(r#"{"code": 206, "fallback": "red"}"#).unwrap();
/// assert_eq!(colour, ColourSetting::code_with_fallback(206, "red"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourSetting {
    /// A named colour.
    Name(String),
    /// A palette index, with an optional named fallback.
    Code {
        /// The 0-255 palette index.
        code: i64,
        /// The named colour used when the terminal lacks 256 colours.
        fallback: Option<String>,
    },
}

impl ColourSetting {
    /// Creates a named colour setting.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates an indexed colour setting without a fallback.
    #[must_use]
    pub fn code(code: i64) -> Self {
        Self::Code {
            code,
            fallback: None,
        }
    }

    /// Creates an indexed colour setting with a named fallback.
    #[must_use]
    pub fn code_with_fallback(code: i64, fallback: impl Into<String>) -> Self {
        Self::Code {
            code,
            fallback: Some(fallback.into()),
        }
    }

    /// Returns the colour request to hand to the style engine.
    #[must_use]
    pub fn request(&self) -> ColourRequest {
        match self {
            Self::Name(name) => ColourRequest::Name(name.clone()),
            Self::Code { code, .. } => ColourRequest::Code(*code),
        }
    }

    /// Returns the parsed fallback colour, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback is not a palette name.
    pub fn fallback(&self) -> Result<Option<NamedColour>, StyleError> {
        match self {
            Self::Code {
                fallback: Some(name),
                ..
            } => name.parse().map(Some),
            Self::Code { fallback: None, .. } | Self::Name(_) => Ok(None),
        }
    }

    /// Checks the setting independently of any terminal.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names, out of range codes, or an
    /// unknown fallback name.
    pub fn validate(&self) -> Result<(), StyleError> {
        match self {
            Self::Name(name) => name.parse::<NamedColour>().map(|_| ()),
            Self::Code { code, .. } => {
                u8::try_from(*code).map_err(|_| StyleError::InvalidColourCode { code: *code })?;
                self.fallback().map(|_| ())
            }
        }
    }
}

impl Serialize for ColourSetting {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Name(name) => serializer.serialize_str(name),
            Self::Code {
                code,
                fallback: None,
            } => serializer.serialize_i64(*code),
            Self::Code {
                code,
                fallback: Some(fallback),
            } => {
                use serde::ser::SerializeStruct;
                let mut state = serializer.serialize_struct("ColourSetting", 2)?;
                state.serialize_field("code", code)?;
                state.serialize_field("fallback", fallback)?;
                state.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ColourSetting {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ColourSettingVisitor;

        impl<'de> Visitor<'de> for ColourSettingVisitor {
            type Value = ColourSetting;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    "a colour name, a palette index, or an object with code and optional fallback",
                )
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ColourSetting::name(v))
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ColourSetting::code(v))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                // Anything too large for i64 is out of range anyway
                Ok(ColourSetting::code(i64::try_from(v).unwrap_or(i64::MAX)))
            }

            fn visit_f64<E>(self, v: f64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                whole_number(v)
                    .map(ColourSetting::code)
                    .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Float(v), &self))
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut code: Option<i64> = None;
                let mut fallback: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "code" => {
                            if code.is_some() {
                                return Err(de::Error::duplicate_field("code"));
                            }
                            code = Some(map.next_value()?);
                        }
                        "fallback" => {
                            if fallback.is_some() {
                                return Err(de::Error::duplicate_field("fallback"));
                            }
                            fallback = Some(map.next_value()?);
                        }
                        _ => {
                            // Ignore unknown fields for forward compatibility
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                let code = code.ok_or_else(|| de::Error::missing_field("code"))?;
                Ok(ColourSetting::Code { code, fallback })
            }
        }

        deserializer.deserialize_any(ColourSettingVisitor)
    }
}

/// Horizontal margin as written in a configuration file.
///
/// # Examples
///
/// ```
/// use climenu_config::MarginSetting;
///
/// let margin: MarginSetting = serde_json::from_str("4").unwrap();
/// assert_eq!(margin, MarginSetting::Columns(4));
///
/// let margin: MarginSetting = serde_json::from_str(r#""auto""#).unwrap();
/// assert_eq!(margin, MarginSetting::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSetting {
    /// A fixed number of columns on each side.
    Columns(u16),
    /// Centre the menu in the terminal.
    Auto,
}

const AUTO: &str = "auto";

impl Serialize for MarginSetting {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Columns(columns) => serializer.serialize_u16(*columns),
            Self::Auto => serializer.serialize_str(AUTO),
        }
    }
}

impl<'de> Deserialize<'de> for MarginSetting {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginVisitor;

        impl MarginVisitor {
            fn columns<E: de::Error>(self, v: i128) -> std::result::Result<MarginSetting, E> {
                u16::try_from(v)
                    .map(MarginSetting::Columns)
                    .map_err(|_| E::custom(format!("margin {v} is out of range (0-65535)")))
            }
        }

        impl<'de> Visitor<'de> for MarginVisitor {
            type Value = MarginSetting;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number of columns or \"auto\"")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v == AUTO {
                    Ok(MarginSetting::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.columns(i128::from(v))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.columns(i128::from(v))
            }

            fn visit_f64<E>(self, v: f64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                match whole_number(v) {
                    Some(v) => self.columns(i128::from(v)),
                    None => Err(E::invalid_value(de::Unexpected::Float(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(MarginVisitor)
    }
}

/// Returns `v` as an integer if it has no fractional part and fits in i64.
fn whole_number(v: f64) -> Option<i64> {
    let truncated = v as i64;
    (v.fract() == 0.0 && truncated as f64 == v).then_some(truncated)
}
