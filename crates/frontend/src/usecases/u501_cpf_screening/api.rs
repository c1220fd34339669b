use contracts::usecases::u501_cpf_screening::{
    DatasourceEnvelope, ScreeningOutcome, ScreeningQuery,
};
use gloo_net::http::Request;

/// Look a CPF up in the blocklist datasource
pub async fn fetch_outcome(url: &str, cpf: &str) -> Result<ScreeningOutcome, String> {
    let query = serde_qs::to_string(&ScreeningQuery::new(cpf))
        .map_err(|e| format!("Failed to encode query: {}", e))?;
    let url = format!("{}?{}", url, query);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: DatasourceEnvelope = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(ScreeningOutcome::from_envelope(envelope))
}
