use serde::{Deserialize, Serialize};

/// Envelope returned by the measures endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SonarMeasuresResponse {
    pub component: SonarComponent,
}

/// Analyzed component with its current measure values
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SonarComponent {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    /// "TRK" for projects
    #[serde(default)]
    pub qualifier: Option<String>,
    #[serde(default)]
    pub measures: Vec<SonarMeasure>,
}

/// One measure. The server reports values as strings; metrics without a
/// current value omit the field entirely.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SonarMeasure {
    pub metric: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, rename = "bestValue")]
    pub best_value: Option<bool>,
}
