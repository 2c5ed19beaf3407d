use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::Pg;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Candle interval enumeration
///
/// Time span covered by a single OHLCV candle. Stored as TEXT in PostgreSQL
/// using the short wire form ("1m", "1h", ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
pub enum CandleInterval {
    #[serde(rename = "1m")]
    OneMinute,

    #[serde(rename = "5m")]
    FiveMinutes,

    #[serde(rename = "15m")]
    FifteenMinutes,

    #[serde(rename = "1h")]
    OneHour,

    #[serde(rename = "4h")]
    FourHours,

    #[serde(rename = "1d")]
    OneDay,
}

impl CandleInterval {
    /// Convert enum to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CandleInterval::OneMinute => "1m",
            CandleInterval::FiveMinutes => "5m",
            CandleInterval::FifteenMinutes => "15m",
            CandleInterval::OneHour => "1h",
            CandleInterval::FourHours => "4h",
            CandleInterval::OneDay => "1d",
        }
    }

    /// Parse string to CandleInterval
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1m" => Some(CandleInterval::OneMinute),
            "5m" => Some(CandleInterval::FiveMinutes),
            "15m" => Some(CandleInterval::FifteenMinutes),
            "1h" => Some(CandleInterval::OneHour),
            "4h" => Some(CandleInterval::FourHours),
            "1d" => Some(CandleInterval::OneDay),
            _ => None,
        }
    }

    /// Get all interval variants
    pub fn all() -> Vec<Self> {
        vec![
            CandleInterval::OneMinute,
            CandleInterval::FiveMinutes,
            CandleInterval::FifteenMinutes,
            CandleInterval::OneHour,
            CandleInterval::FourHours,
            CandleInterval::OneDay,
        ]
    }

    /// Get duration in seconds
    pub fn duration_seconds(&self) -> i64 {
        match self {
            CandleInterval::OneMinute => 60,
            CandleInterval::FiveMinutes => 300,
            CandleInterval::FifteenMinutes => 900,
            CandleInterval::OneHour => 3600,
            CandleInterval::FourHours => 14400,
            CandleInterval::OneDay => 86400,
        }
    }
}

impl fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql<Text, Pg> for CandleInterval {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for CandleInterval {
    fn from_sql(bytes: <Pg as diesel::backend::Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let text = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        CandleInterval::from_str(&text)
            .ok_or_else(|| format!("Invalid candle interval: {}", text).into())
    }
}
