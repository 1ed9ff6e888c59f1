use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const BASE_URL: &str = "https://apis.digital.gob.cl/fl/feriados";

/// One holiday as published by the source API.
///
/// The API also sends `comentarios`, `irrenunciable` and `leyes`; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceHoliday {
    pub nombre: String,
    /// `YYYY-MM-DD`, left unparsed so the caller decides how to fail.
    pub fecha: String,
    pub tipo: String,
}

pub fn year_url(year: i32) -> String {
    format!("{BASE_URL}/{year}")
}

pub async fn fetch_holidays(url: &str) -> Result<Vec<SourceHoliday>, FetchHolidaysError> {
    let client = Client::new();

    // The endpoint sits behind a filter that rejects requests without browser headers.
    let response = client
        .get(url)
        .header(
            header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,application/json;q=0.8,*/*;q=0.7",
        )
        .header(header::ACCEPT_LANGUAGE, "es-CL,es;q=0.9,en-US;q=0.8,en;q=0.7")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::PRAGMA, "no-cache")
        .header(
            header::USER_AGENT,
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
        )
        .send()
        .await
        .map_err(|source| FetchHolidaysError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchHolidaysError::ResponseRead { source })?;

    debug!(%url, %status, bytes = body.len(), "holidays source responded");

    if !status.is_success() {
        return Err(FetchHolidaysError::UnexpectedStatus { status, body });
    }

    decode_holidays(&body)
}

pub fn decode_holidays(body: &str) -> Result<Vec<SourceHoliday>, FetchHolidaysError> {
    serde_json::from_str(body).map_err(|source| FetchHolidaysError::DeserializeResponseBody { source })
}

#[derive(Debug, Error)]
pub enum FetchHolidaysError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("UnexpectedStatus: {status}")]
    UnexpectedStatus {
        status: StatusCode,
        body: String,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_source_payload_and_ignores_extra_fields() {
        let body = r#"[
            {"nombre":"Año Nuevo","comentarios":null,"fecha":"2024-01-01","irrenunciable":"1","tipo":"Civil","leyes":[{"nombre":"Ley 2.977","url":"https://www.leychile.cl/Navegar?idNorma=1040936"}]},
            {"nombre":"Viernes Santo","comentarios":null,"fecha":"2024-03-29","irrenunciable":"0","tipo":"Religioso"}
        ]"#;

        let holidays = decode_holidays(body).unwrap();

        assert_eq!(
            holidays,
            vec![
                SourceHoliday {
                    nombre: "Año Nuevo".to_string(),
                    fecha: "2024-01-01".to_string(),
                    tipo: "Civil".to_string(),
                },
                SourceHoliday {
                    nombre: "Viernes Santo".to_string(),
                    fecha: "2024-03-29".to_string(),
                    tipo: "Religioso".to_string(),
                },
            ]
        );
    }

    #[test]
    fn rejects_objects_missing_required_fields() {
        let err = decode_holidays(r#"[{"nombre":"Año Nuevo","tipo":"Civil"}]"#).unwrap_err();
        assert!(matches!(err, FetchHolidaysError::DeserializeResponseBody { .. }));
    }

    #[test]
    fn rejects_non_array_body() {
        let err = decode_holidays(r#"{"error":true,"message":"rate limited"}"#).unwrap_err();
        assert!(matches!(err, FetchHolidaysError::DeserializeResponseBody { .. }));
    }

    const FIXTURE: &str = r#"[{"nombre":"Año Nuevo","comentarios":null,"fecha":"2024-01-01","irrenunciable":"1","tipo":"Civil"}]"#;

    #[tokio::test]
    async fn fetches_with_spanish_locale_headers() {
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fl/feriados/2024"))
            .and(header("accept-language", "es-CL,es;q=0.9,en-US;q=0.8,en;q=0.7"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let holidays = fetch_holidays(&format!("{}/fl/feriados/2024", server.uri()))
            .await
            .unwrap();

        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].nombre, "Año Nuevo");
        assert_eq!(holidays[0].fecha, "2024-01-01");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error_even_with_a_json_body() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_raw(FIXTURE, "application/json"))
            .mount(&server)
            .await;

        let err = fetch_holidays(&server.uri()).await.unwrap_err();

        match err {
            FetchHolidaysError::UnexpectedStatus { status, body } => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, FIXTURE);
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_source_is_a_send_error() {
        let err = fetch_holidays("http://127.0.0.1:1/fl/feriados/2024").await.unwrap_err();
        assert!(matches!(err, FetchHolidaysError::RequestSend { .. }));
    }

    #[test]
    fn builds_year_url() {
        assert_eq!(year_url(2024), "https://apis.digital.gob.cl/fl/feriados/2024");
    }
}
