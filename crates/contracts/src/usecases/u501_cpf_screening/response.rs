use serde::{Deserialize, Serialize};

/// Envelope returned by the Orquestra datasource API.
///
/// `success` is mandatory: an error reply must not decode as "no match".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasourceEnvelope {
    pub success: Vec<DatasourceRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasourceRecord {
    #[serde(default)]
    pub cod: String,
    #[serde(default)]
    pub fields: DatasourceFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasourceFields {
    #[serde(rename = "tipoBloqueio", default)]
    pub tipo_bloqueio: Option<String>,
}
