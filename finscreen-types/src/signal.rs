use serde::{Deserialize, Serialize};

/// Predefined screens selected with the `s=` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Signal {
    /// Largest percentage gainers today.
    TopGainers,
    /// Largest percentage losers today.
    TopLosers,
    /// New 52-week high.
    NewHigh,
    /// New 52-week low.
    NewLow,
    /// Highest intraday volatility.
    MostVolatile,
    /// Highest volume.
    MostActive,
    /// Volume well above average.
    UnusualVolume,
    /// RSI above 70.
    Overbought,
    /// RSI below 30.
    Oversold,
    /// Analyst downgrades today.
    Downgrades,
    /// Analyst upgrades today.
    Upgrades,
    /// Reporting earnings before market open.
    EarningsBefore,
    /// Reporting earnings after market close.
    EarningsAfter,
    /// Recent insider purchases.
    RecentInsiderBuying,
    /// Recent insider sales.
    RecentInsiderSelling,
    /// Tickers with major news today.
    MajorNews,
    /// Horizontal support/resistance pattern.
    HorizontalSr,
    /// Channel up pattern.
    ChannelUp,
    /// Double bottom pattern.
    DoubleBottom,
    /// Double top pattern.
    DoubleTop,
}

impl Signal {
    /// Upstream `s=` code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TopGainers => "ta_topgainers",
            Self::TopLosers => "ta_toplosers",
            Self::NewHigh => "ta_newhigh",
            Self::NewLow => "ta_newlow",
            Self::MostVolatile => "ta_mostvolatile",
            Self::MostActive => "ta_mostactive",
            Self::UnusualVolume => "ta_unusualvolume",
            Self::Overbought => "ta_overbought",
            Self::Oversold => "ta_oversold",
            Self::Downgrades => "n_downgrades",
            Self::Upgrades => "n_upgrades",
            Self::EarningsBefore => "n_earningsbefore",
            Self::EarningsAfter => "n_earningsafter",
            Self::RecentInsiderBuying => "it_latestbuys",
            Self::RecentInsiderSelling => "it_latestsales",
            Self::MajorNews => "n_majornews",
            Self::HorizontalSr => "ta_p_horizontal",
            Self::ChannelUp => "ta_p_channelup",
            Self::DoubleBottom => "ta_p_doublebottom",
            Self::DoubleTop => "ta_p_doubletop",
        }
    }
}
