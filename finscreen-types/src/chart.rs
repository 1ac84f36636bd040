use core::fmt;

use serde::{Deserialize, Serialize};

use crate::ScreenError;

/// Chart rendering style for the Charts view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartStyle {
    /// Candles with technical overlays. Daily only.
    #[default]
    Technical,
    /// Plain candles.
    Candle,
    /// Line chart.
    Line,
}

/// Chart period for the Charts view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    /// One candle per day.
    #[default]
    Daily,
    /// One candle per week.
    Weekly,
    /// One candle per month.
    Monthly,
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Technical => "technical",
            Self::Candle => "candle",
            Self::Line => "line",
        })
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        })
    }
}

impl Timeframe {
    /// Upstream `p=` code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Daily => "d",
            Self::Weekly => "w",
            Self::Monthly => "m",
        }
    }
}

impl ChartStyle {
    /// Upstream `(ty, ta)` pair.
    #[must_use]
    pub const fn codes(self) -> (&'static str, &'static str) {
        match self {
            Self::Technical => ("c", "1"),
            Self::Candle => ("c", "0"),
            Self::Line => ("l", "0"),
        }
    }

    /// Check that this style can be rendered at `timeframe`.
    ///
    /// # Errors
    /// Returns `InvalidChartStyle` for the technical style on anything but
    /// the daily timeframe.
    pub fn validate(self, timeframe: Timeframe) -> Result<(), ScreenError> {
        if self == Self::Technical && timeframe != Timeframe::Daily {
            return Err(ScreenError::InvalidChartStyle {
                style: self.to_string(),
                timeframe: timeframe.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technical_is_daily_only() {
        assert!(ChartStyle::Technical.validate(Timeframe::Daily).is_ok());
        assert!(ChartStyle::Line.validate(Timeframe::Monthly).is_ok());
        assert_eq!(
            ChartStyle::Technical.validate(Timeframe::Weekly),
            Err(ScreenError::InvalidChartStyle {
                style: "technical".into(),
                timeframe: "weekly".into()
            })
        );
    }
}
