//! In-memory emulation of a slice of the Smartsheet REST 2.0 API.
//!
//! Routes live under `/2.0`. Every route except `serverinfo` requires a
//! known bearer token. Failures answer with the API's error body shape
//! (`errorCode`, `message`, `refId`) so clients exercise their real error
//! classification.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub const DEFAULT_TOKEN: &str = "mock-token";
pub const OWNER_EMAIL: &str = "owner@example.com";
const DEFAULT_PAGE_SIZE: usize = 100;

pub const INVALID_TOKEN: i32 = 1002;
pub const NOT_FOUND: i32 = 1006;
pub const UNPARSEABLE_REQUEST: i32 = 1008;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: i32,
    pub message: String,
    pub ref_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub id: i64,
    pub name: String,
    pub version: i64,
    #[serde(default)]
    pub columns: Vec<Value>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: i64,
    pub row_number: i64,
    #[serde(default)]
    pub cells: Vec<Value>,
}

#[derive(Deserialize)]
pub struct CreateSheet {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Value>,
}

#[derive(Deserialize)]
pub struct UpdateSheet {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct NewRow {
    #[serde(default)]
    pub cells: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub include_all: Option<bool>,
    pub page_size: Option<usize>,
    pub page: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRowsQuery {
    pub ids: String,
    pub ignore_rows_not_found: Option<bool>,
}

#[derive(Default)]
pub struct Db {
    sheets: BTreeMap<i64, Sheet>,
    next_id: i64,
}

impl Db {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn sheet_mut(&mut self, id: i64) -> Result<&mut Sheet, ApiError> {
        self.sheets.get_mut(&id).ok_or_else(ApiError::not_found)
    }
}

pub struct AppState {
    tokens: HashSet<String>,
    db: RwLock<Db>,
}

pub type SharedState = Arc<AppState>;

/// An error answered in the API's error body format.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: i32,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, code: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND, "Not Found")
    }

    fn unparseable(detail: impl std::fmt::Display) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            UNPARSEABLE_REQUEST,
            format!("Unable to parse request. The following error occurred: {detail}"),
        )
    }
}

static REF_IDS: AtomicU64 = AtomicU64::new(1);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error_code: self.code,
            message: self.message,
            ref_id: format!("mock-{}", REF_IDS.fetch_add(1, Ordering::Relaxed)),
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn app() -> Router {
    app_with_tokens([DEFAULT_TOKEN])
}

pub fn app_with_tokens<I, S>(tokens: I) -> Router
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let state: SharedState = Arc::new(AppState {
        tokens: tokens.into_iter().map(Into::into).collect(),
        db: RwLock::new(Db::default()),
    });
    let api = Router::new()
        .route("/sheets", get(list_sheets).post(create_sheet))
        .route(
            "/sheets/{id}",
            get(get_sheet).put(update_sheet).delete(delete_sheet),
        )
        .route("/sheets/{id}/version", get(sheet_version))
        .route("/sheets/{id}/rows", post(add_rows).delete(delete_rows))
        .route("/sheets/{id}/attachments", post(attach_file))
        .route("/users/me", get(current_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .route("/serverinfo", get(server_info));
    Router::new().nest("/2.0", api).with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_bearer(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| state.tokens.contains(token));
    if !authorized {
        info!(uri = %request.uri(), "rejected bearer token");
        return ApiError::new(
            StatusCode::UNAUTHORIZED,
            INVALID_TOKEN,
            "Your Access Token is invalid.",
        )
        .into_response();
    }
    debug!(method = %request.method(), uri = %request.uri(), "authorized");
    next.run(request).await
}

fn success(result: Option<Value>) -> Json<Value> {
    let mut body = json!({"message": "SUCCESS", "resultCode": 0});
    if let Some(result) = result {
        body["result"] = result;
    }
    Json(body)
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, 4000, e.to_string())
    })
}

/// Slice `total` items into the page `query` asks for, returning
/// `(page_number, page_size, total_pages, skip)`.
pub fn page_window(query: &PageQuery, total: usize) -> (usize, usize, usize, usize) {
    if query.include_all.unwrap_or(false) {
        return (1, total, 1, 0);
    }
    let size = query
        .page_size
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let pages = total.div_ceil(size);
    let page = query.page.unwrap_or(1).clamp(1, pages.max(1));
    (page, size, pages, (page - 1) * size)
}

/// Extract the decoded file name from `attachment; filename="..."`.
pub fn disposition_file_name(value: &str) -> Option<String> {
    let start = value.find("filename=\"")? + "filename=\"".len();
    let rest = &value[start..];
    let end = rest.find('"')?;
    urlencoding::decode(&rest[..end]).ok().map(|name| name.into_owned())
}

async fn server_info() -> Json<Value> {
    Json(json!({
        "supportedLocales": ["en_US", "de_DE", "fr_FR"],
        "formats": {"currency": ["none", "USD", "EUR"]}
    }))
}

async fn list_sheets(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Json<Value> {
    let db = state.db.read().await;
    let total = db.sheets.len();
    let (page, size, pages, skip) = page_window(&query, total);
    let data: Vec<Value> = db
        .sheets
        .values()
        .skip(skip)
        .take(size)
        .map(|sheet| json!({"id": sheet.id, "name": sheet.name}))
        .collect();
    Json(json!({
        "pageNumber": page,
        "pageSize": size,
        "totalPages": pages,
        "totalCount": total,
        "data": data
    }))
}

async fn create_sheet(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let input: CreateSheet = serde_json::from_slice(&body).map_err(ApiError::unparseable)?;
    let mut db = state.db.write().await;
    let id = db.allocate_id();
    let mut columns = input.columns;
    for column in columns.iter_mut() {
        let column_id = db.allocate_id();
        if let Some(object) = column.as_object_mut() {
            object.insert("id".to_string(), json!(column_id));
        }
    }
    let sheet = Sheet {
        id,
        name: input.name,
        version: 1,
        columns,
        rows: Vec::new(),
    };
    let result = to_value(&sheet)?;
    db.sheets.insert(id, sheet);
    info!(sheet_id = id, "created sheet");
    Ok(success(Some(result)))
}

async fn get_sheet(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Sheet>, ApiError> {
    let db = state.db.read().await;
    db.sheets.get(&id).cloned().map(Json).ok_or_else(ApiError::not_found)
}

async fn update_sheet(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let input: UpdateSheet = serde_json::from_slice(&body).map_err(ApiError::unparseable)?;
    let mut db = state.db.write().await;
    let sheet = db.sheet_mut(id)?;
    if let Some(name) = input.name {
        sheet.name = name;
    }
    sheet.version += 1;
    Ok(success(Some(to_value(sheet)?)))
}

async fn delete_sheet(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let mut db = state.db.write().await;
    db.sheets.remove(&id).ok_or_else(ApiError::not_found)?;
    info!(sheet_id = id, "deleted sheet");
    Ok(success(None))
}

async fn sheet_version(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let db = state.db.read().await;
    let sheet = db.sheets.get(&id).ok_or_else(ApiError::not_found)?;
    Ok(Json(json!({"version": sheet.version})))
}

async fn add_rows(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let input: Vec<NewRow> = serde_json::from_slice(&body).map_err(ApiError::unparseable)?;
    if input.is_empty() {
        return Err(ApiError::unparseable("at least one row is required"));
    }
    let mut db = state.db.write().await;
    db.sheet_mut(id)?;
    let ids: Vec<i64> = input.iter().map(|_| db.allocate_id()).collect();
    let sheet = db.sheet_mut(id)?;
    let mut added = Vec::with_capacity(input.len());
    for (row_id, row) in ids.into_iter().zip(input) {
        let row = Row {
            id: row_id,
            row_number: sheet.rows.len() as i64 + 1,
            cells: row.cells,
        };
        sheet.rows.push(row.clone());
        added.push(row);
    }
    sheet.version += 1;
    Ok(success(Some(to_value(&added)?)))
}

async fn delete_rows(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Query(query): Query<DeleteRowsQuery>,
) -> Result<Json<Value>, ApiError> {
    let ids = query
        .ids
        .split(',')
        .map(|raw| raw.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(ApiError::unparseable)?;
    let ignore_missing = query.ignore_rows_not_found.unwrap_or(false);

    let mut db = state.db.write().await;
    let sheet = db.sheet_mut(id)?;
    let present: Vec<i64> = ids
        .iter()
        .copied()
        .filter(|row_id| sheet.rows.iter().any(|row| row.id == *row_id))
        .collect();
    if !ignore_missing && present.len() != ids.len() {
        return Err(ApiError::not_found());
    }
    sheet.rows.retain(|row| !present.contains(&row.id));
    for (index, row) in sheet.rows.iter_mut().enumerate() {
        row.row_number = index as i64 + 1;
    }
    sheet.version += 1;
    Ok(success(Some(json!(present))))
}

async fn attach_file(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let file_name = headers
        .get(header::CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .and_then(disposition_file_name)
        .ok_or_else(|| ApiError::unparseable("Content-Disposition with a filename is required"))?;
    let mime_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let mut db = state.db.write().await;
    db.sheet_mut(id)?;
    let attachment_id = db.allocate_id();
    info!(sheet_id = id, file = %file_name, bytes = body.len(), "attached file");
    Ok(success(Some(json!({
        "id": attachment_id,
        "name": file_name,
        "attachmentType": "FILE",
        "mimeType": mime_type,
        "sizeInKb": body.len().div_ceil(1024),
        "parentType": "SHEET",
        "parentId": id
    }))))
}

async fn current_user(headers: HeaderMap) -> Json<Value> {
    let email = headers
        .get("Assume-User")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .unwrap_or_else(|| OWNER_EMAIL.to_string());
    Json(json!({
        "id": 1,
        "email": email,
        "firstName": "Mock",
        "lastName": "User",
        "locale": "en_US",
        "timeZone": "UTC",
        "account": {"id": 1, "name": "Mock Account"}
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_uses_api_field_names() {
        let body = ErrorBody {
            error_code: 1006,
            message: "Not Found".to_string(),
            ref_id: "abc".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"errorCode": 1006, "message": "Not Found", "refId": "abc"})
        );
    }

    #[test]
    fn create_sheet_requires_name() {
        let result: Result<CreateSheet, _> = serde_json::from_str(r#"{"columns":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn page_window_defaults_to_first_page() {
        assert_eq!(page_window(&PageQuery::default(), 3), (1, 100, 1, 0));
    }

    #[test]
    fn page_window_slices_later_pages() {
        let query = PageQuery {
            page_size: Some(2),
            page: Some(2),
            ..PageQuery::default()
        };
        assert_eq!(page_window(&query, 5), (2, 2, 3, 2));
    }

    #[test]
    fn page_window_clamps_past_the_end() {
        let query = PageQuery {
            page_size: Some(2),
            page: Some(9),
            ..PageQuery::default()
        };
        assert_eq!(page_window(&query, 3), (2, 2, 2, 2));
    }

    #[test]
    fn page_window_include_all() {
        let query = PageQuery {
            include_all: Some(true),
            ..PageQuery::default()
        };
        assert_eq!(page_window(&query, 7), (1, 7, 1, 0));
    }

    #[test]
    fn disposition_name_is_decoded() {
        assert_eq!(
            disposition_file_name("attachment; filename=\"q3%20report.pdf\""),
            Some("q3 report.pdf".to_string())
        );
        assert_eq!(disposition_file_name("inline"), None);
    }
}
