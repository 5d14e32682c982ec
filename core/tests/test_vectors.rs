//! Verify facade requests and response handling against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request, a simulated
//! response, and either the expected decoded result or the expected error
//! kind. Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use smartsheet_core::models::{Row, Sheet};
use smartsheet_core::resources::GetSheetOptions;
use smartsheet_core::{
    HttpMethod, HttpRequest, HttpResponse, PaginationParameters, SmartsheetClient,
    SmartsheetError, Transport, TransportError,
};

const BASE_URL: &str = "https://api.test/2.0/";

/// Answers every request with one canned response and keeps the last request.
struct CannedTransport {
    response: HttpResponse,
    seen: Mutex<Option<HttpRequest>>,
}

impl Transport for CannedTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        *self.seen.lock().unwrap() = Some(request.clone());
        Ok(self.response.clone())
    }

    fn release_connection(&self) {}
}

fn client_answering(response: HttpResponse) -> (SmartsheetClient, Arc<CannedTransport>) {
    let transport = Arc::new(CannedTransport {
        response,
        seen: Mutex::new(None),
    });
    let client = SmartsheetClient::builder()
        .access_token("vector-token")
        .base_uri(BASE_URL)
        .transport(transport.clone())
        .build()
        .unwrap();
    (client, transport)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn error_kind(err: &SmartsheetError) -> &'static str {
    match err {
        SmartsheetError::InvalidArgument(_) => "InvalidArgument",
        SmartsheetError::Serialization { .. } => "Serialization",
        SmartsheetError::InvalidRequest { .. } => "InvalidRequest",
        SmartsheetError::NotAuthorized(_) => "NotAuthorized",
        SmartsheetError::Forbidden(_) => "Forbidden",
        SmartsheetError::ResourceNotFound(_) => "ResourceNotFound",
        SmartsheetError::ServiceUnavailable(_) => "ServiceUnavailable",
        SmartsheetError::Rest { .. } => "Rest",
        SmartsheetError::Client { .. } => "Client",
    }
}

fn to_json<T: serde::Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap()
}

/// Run the named facade operation with inputs from the vector, returning the
/// decoded result as JSON.
fn run(client: &SmartsheetClient, operation: &str, input: &Value) -> Result<Value, SmartsheetError> {
    let sheet_id = input["sheetId"].as_i64().unwrap_or_default();
    match operation {
        "get_sheet" => client
            .sheets()
            .get_sheet(sheet_id, &GetSheetOptions::default())
            .map(to_json),
        "create_sheet" => {
            let sheet: Sheet = serde_json::from_value(input["sheet"].clone()).unwrap();
            client.sheets().create_sheet(&sheet).map(to_json)
        }
        "list_sheets" => {
            let pagination = PaginationParameters::page(
                input["page"].as_u64().unwrap() as u32,
                input["pageSize"].as_u64().unwrap() as u32,
            );
            client.sheets().list_sheets(Some(&pagination)).map(to_json)
        }
        "delete_sheet" => client.sheets().delete_sheet(sheet_id).map(to_json),
        "add_rows" => {
            let rows: Vec<Row> = serde_json::from_value(input["rows"].clone()).unwrap();
            client.rows().add_rows(sheet_id, &rows).map(to_json)
        }
        "update_rows" => {
            let rows: Vec<Row> = serde_json::from_value(input["rows"].clone()).unwrap();
            client.rows().update_rows(sheet_id, &rows).map(to_json)
        }
        "delete_rows" => {
            let ids: Vec<i64> = serde_json::from_value(input["rowIds"].clone()).unwrap();
            let ignore = input["ignoreRowsNotFound"].as_bool().unwrap();
            client.rows().delete_rows(sheet_id, &ids, ignore).map(to_json)
        }
        other => panic!("unknown operation: {other}"),
    }
}

fn check_cases(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        );
        let (client, transport) = client_answering(response);

        let outcome = run(&client, case["operation"].as_str().unwrap(), &case["input"]);

        // Verify the request
        let req = transport.seen.lock().unwrap().take().expect("request sent");
        let expected_req = &case["expected_request"];
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        for header in expected_req["headers"].as_array().unwrap() {
            let pair = header.as_array().unwrap();
            let (key, value) = (pair[0].as_str().unwrap(), pair[1].as_str().unwrap());
            assert_eq!(req.header(key), Some(value), "{name}: header {key}");
        }
        let req_body = req
            .body
            .as_ref()
            .map(|body| serde_json::from_slice::<Value>(&body.content).unwrap())
            .unwrap_or(Value::Null);
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify the outcome
        match case.get("expected_error") {
            Some(expected) => {
                let err = outcome.expect_err(name);
                assert_eq!(error_kind(&err), expected["kind"], "{name}: error kind");
                let body = err.error_body().expect("error body");
                assert_eq!(i64::from(body.error_code), expected["errorCode"], "{name}: errorCode");
                assert_eq!(body.ref_id, expected["refId"].as_str().unwrap(), "{name}: refId");
            }
            None => {
                let result = outcome.unwrap_or_else(|e| panic!("{name}: {e}"));
                assert_eq!(result, case["expected_result"], "{name}: decoded result");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sheets
// ---------------------------------------------------------------------------

#[test]
fn sheet_test_vectors() {
    check_cases(include_str!("../../test-vectors/sheets.json"));
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[test]
fn row_test_vectors() {
    check_cases(include_str!("../../test-vectors/rows.json"));
}

// ---------------------------------------------------------------------------
// Error classification
// ---------------------------------------------------------------------------

#[test]
fn error_test_vectors() {
    let raw = include_str!("../../test-vectors/errors.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let status = case["status"].as_u64().unwrap() as u16;
        let code = case["errorCode"].as_i64().unwrap();
        let body = format!(r#"{{"errorCode":{code},"message":"HTTP {status}","refId":"x"}}"#);
        let (client, _) = client_answering(HttpResponse::new(status, body));

        let err = client.server_info().get_server_info().unwrap_err();

        assert_eq!(error_kind(&err), case["kind"], "HTTP {status}: kind");
        assert_eq!(err.status(), Some(status), "HTTP {status}: status");
        let error_body = err.error_body().unwrap();
        assert_eq!(error_body.message, format!("HTTP {status}"));
        assert_eq!(i64::from(error_body.error_code), code);
    }
}
