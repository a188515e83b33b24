use super::{FormatKind, RawFormat};

use serde::{Serialize, Serializer};
use serde_json::Number;
use std::fmt::{self, Display, Formatter};

const BYTES_IN_MB: f64 = 1024.0 * 1024.0;

/// Optional numeric field rendered as `""` when missing.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberOrEmpty {
    Number(Number),
    Empty,
}

impl NumberOrEmpty {
    #[cfg(test)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            Self::Empty => None,
        }
    }
}

impl From<Option<&Number>> for NumberOrEmpty {
    fn from(value: Option<&Number>) -> Self {
        match value {
            Some(number) if number.as_f64().is_some_and(|value| value != 0.0) => Self::Number(number.clone()),
            _ => Self::Empty,
        }
    }
}

impl Display for NumberOrEmpty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Empty => Ok(()),
        }
    }
}

impl Serialize for NumberOrEmpty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Number(number) => number.serialize(serializer),
            Self::Empty => serializer.serialize_str(""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFormat {
    pub format_id: String,
    pub ext: Option<String>,
    pub resolution: String,
    pub fps: NumberOrEmpty,
    pub abr: NumberOrEmpty,
    #[serde(rename = "type")]
    pub kind: FormatKind,
    pub size_mb: Option<f64>,
}

fn bytes_to_mb(bytes: f64) -> f64 {
    (bytes / BYTES_IN_MB * 100.0).round_ties_even() / 100.0
}

impl From<&RawFormat> for DisplayFormat {
    fn from(format: &RawFormat) -> Self {
        Self {
            format_id: format.format_id.clone(),
            ext: format.ext.clone(),
            resolution: format.resolution.clone().unwrap_or_default(),
            fps: format.fps.as_ref().into(),
            abr: format.abr.as_ref().into(),
            kind: format.kind(),
            size_mb: format.size_bytes().map(bytes_to_mb),
        }
    }
}
