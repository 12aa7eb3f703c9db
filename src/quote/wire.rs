use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct DailySeriesEnvelope {
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
    #[serde(rename = "Meta Data")]
    pub(crate) meta: Option<MetaData>,
    #[serde(rename = "Time Series (Daily)")]
    pub(crate) series: Option<BTreeMap<String, DailyBar>>,
}

#[derive(Deserialize)]
pub(crate) struct MetaData {
    #[serde(rename = "2. Symbol")]
    pub(crate) symbol: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct DailyBar {
    #[serde(rename = "1. open")]
    pub(crate) open: String,
    #[serde(rename = "4. close")]
    pub(crate) close: String,
}
