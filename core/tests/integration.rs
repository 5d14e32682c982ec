//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client over real
//! HTTP through the default `UreqTransport`. Validates that request building,
//! header handling, envelope decoding and error classification agree with
//! what the server actually sends.

use std::net::SocketAddr;
use std::time::Duration;

use smartsheet_core::models::{Cell, Column, Row, Sheet};
use smartsheet_core::resources::GetSheetOptions;
use smartsheet_core::{FileUpload, PaginationParameters, SmartsheetClient, SmartsheetError};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> SmartsheetClient {
    SmartsheetClient::builder()
        .access_token(mock_server::DEFAULT_TOKEN)
        .base_uri(format!("http://{addr}/2.0"))
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}

#[test]
fn sheet_lifecycle() {
    let addr = start_server();
    let client = client_for(addr);

    // Step 1: server info needs no token and decodes.
    let info = client.server_info().get_server_info().unwrap();
    assert!(info.supported_locales.contains(&"en_US".to_string()));

    // Step 2: list: should be empty.
    let page = client.sheets().list_sheets(None).unwrap();
    assert_eq!(page.total_count, 0);
    assert!(page.data.is_empty(), "expected empty listing");

    // Step 3: create a sheet with a primary column.
    let new_sheet = Sheet {
        columns: Some(vec![Column {
            primary: Some(true),
            ..Column::new("Task", "TEXT_NUMBER")
        }]),
        ..Sheet::named("Integration test")
    };
    let created = client.sheets().create_sheet(&new_sheet).unwrap();
    assert_eq!(created.name.as_deref(), Some("Integration test"));
    let sheet_id = created.id.unwrap();
    let column_id = created.columns.as_ref().unwrap()[0].id.unwrap();

    // Step 4: add two rows.
    let rows = client
        .rows()
        .add_rows(
            sheet_id,
            &[
                Row::with_cells(vec![Cell::new(column_id, "first")]),
                Row::with_cells(vec![Cell::new(column_id, 2.0)]),
            ],
        )
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].row_number, Some(2));
    let first_row = rows[0].id.unwrap();

    // Step 5: get reflects the rows and the version moved.
    let fetched = client
        .sheets()
        .get_sheet(sheet_id, &GetSheetOptions::default())
        .unwrap();
    assert_eq!(fetched.rows.as_ref().unwrap().len(), 2);
    let version = client.sheets().get_sheet_version(sheet_id).unwrap();
    assert!(version > created.version.unwrap());

    // Step 6: delete one row, ignoring an id that does not exist.
    let deleted = client
        .rows()
        .delete_rows(sheet_id, &[first_row, 999_999], true)
        .unwrap();
    assert_eq!(deleted, vec![first_row]);

    // Step 7: attach a file; the name round-trips through percent-encoding.
    let upload = FileUpload::new("notes v1.txt", "text/plain", b"hello".to_vec());
    let attachment = client
        .attachments()
        .attach_file_to_sheet(sheet_id, &upload)
        .unwrap();
    assert_eq!(attachment.name.as_deref(), Some("notes v1.txt"));
    assert_eq!(attachment.mime_type.as_deref(), Some("text/plain"));

    // Step 8: rename.
    let renamed = client
        .sheets()
        .update_sheet(&Sheet {
            id: Some(sheet_id),
            ..Sheet::named("Renamed")
        })
        .unwrap();
    assert_eq!(renamed.name.as_deref(), Some("Renamed"));

    // Step 9: paging parameters reach the server.
    let page = client
        .sheets()
        .list_sheets(Some(&PaginationParameters::page(1, 10)))
        .unwrap();
    assert_eq!(page.page_size, 10);
    assert_eq!(page.data[0].id, Some(sheet_id));

    // Step 10: delete, then the sheet is gone.
    client.sheets().delete_sheet(sheet_id).unwrap();
    let err = client
        .sheets()
        .get_sheet(sheet_id, &GetSheetOptions::default())
        .unwrap_err();
    let SmartsheetError::ResourceNotFound(body) = &err else {
        panic!("expected ResourceNotFound, got {err:?}");
    };
    assert_eq!(body.error_code, 1006);
    assert!(!body.ref_id.is_empty());

    // Step 11: deleting again is also not found.
    assert!(matches!(
        client.sheets().delete_sheet(sheet_id),
        Err(SmartsheetError::ResourceNotFound(_))
    ));
}

#[test]
fn token_rotation_and_assumed_user() {
    let addr = start_server();
    let client = client_for(addr);

    let me = client.users().get_current_user().unwrap();
    assert_eq!(me.email.as_deref(), Some(mock_server::OWNER_EMAIL));

    client.set_assumed_user(Some("jane+ops@example.com".to_string()));
    let me = client.users().get_current_user().unwrap();
    assert_eq!(me.email.as_deref(), Some("jane+ops@example.com"));

    // A revoked token fails on the very next call without rebuilding.
    client.set_access_token("revoked");
    let err = client.users().get_current_user().unwrap_err();
    assert!(matches!(err, SmartsheetError::NotAuthorized(_)), "{err:?}");
    assert_eq!(err.error_body().unwrap().error_code, 1002);

    client.set_access_token(mock_server::DEFAULT_TOKEN);
    assert!(client.users().get_current_user().is_ok());
}

#[test]
fn malformed_payload_is_invalid_request() {
    let addr = start_server();
    let client = client_for(addr);

    let err = client
        .passthrough()
        .post_request("sheets", r#"{"columns":[]}"#, &[])
        .unwrap_err();

    assert!(matches!(err, SmartsheetError::InvalidRequest { status: 400, .. }), "{err:?}");
    assert_eq!(err.error_body().unwrap().error_code, 1008);
}

#[test]
fn unreachable_server_is_client_error() {
    let client = SmartsheetClient::builder()
        .access_token("t")
        .base_uri("http://127.0.0.1:1/2.0/")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.sheets().list_sheets(None).unwrap_err();

    assert!(matches!(err, SmartsheetError::Client { .. }), "{err:?}");
}

/// Serve one canned `text/csv` response of `len` bytes on a random port.
fn serve_csv_once(len: usize) -> SocketAddr {
    use std::io::{BufRead, BufReader, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }
        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n"
        )
        .unwrap();
        let chunk = vec![b'a'; 64 * 1024];
        let mut remaining = len;
        while remaining > 0 {
            let n = remaining.min(chunk.len());
            if stream.write_all(&chunk[..n]).is_err() {
                return;
            }
            remaining -= n;
        }
    });
    addr
}

#[test]
fn export_larger_than_ten_megabytes_is_read_in_full() {
    let len = 11 * 1024 * 1024;
    let addr = serve_csv_once(len);
    let client = client_for(addr);

    let csv = client.sheets().get_sheet_as_csv(1).unwrap();

    assert_eq!(csv.len(), len);
}

#[test]
fn configured_response_cap_is_enforced() {
    let addr = serve_csv_once(64 * 1024);
    let client = SmartsheetClient::builder()
        .access_token("t")
        .base_uri(format!("http://{addr}/2.0"))
        .timeout(Duration::from_secs(10))
        .max_response_bytes(1024)
        .build()
        .unwrap();

    let err = client.sheets().get_sheet_as_csv(1).unwrap_err();

    assert!(matches!(err, SmartsheetError::Client { .. }), "{err:?}");
}
