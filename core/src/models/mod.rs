//! Domain DTOs for the REST API.
//!
//! # Design
//! Only the fields the facades need are modelled. Every field is optional on
//! the wire, so structs derive `Default` and are built with struct-update
//! syntax; unset fields are omitted when encoding and unknown fields are
//! ignored when decoding. Polymorphic cell payloads come from
//! `codec::adapters`.

mod attachment;
mod column;
mod container;
mod discussion;
mod event;
mod image;
mod report;
mod row;
mod search;
mod server_info;
mod share;
mod sheet;
mod update_request;
mod user;
mod webhook;

pub use attachment::Attachment;
pub use column::Column;
pub use container::{Favorite, FavoriteType, Folder, Workspace};
pub use discussion::{Comment, Discussion};
pub use event::{Event, EventResult};
pub use image::{ImageUrl, ImageUrlMap};
pub use report::{Report, Sight, Widget};
pub use row::{
    Cell, CellLink, CopyOrMoveRowDestination, CopyOrMoveRowDirective, CopyOrMoveRowResult,
    Hyperlink, Row, RowInclusion, RowMapping,
};
pub use search::{SearchResult, SearchResultItem};
pub use server_info::ServerInfo;
pub use share::Share;
pub use sheet::{
    ContainerDestination, DestinationType, ImportFormat, Sheet, SheetInclusion, SheetVersion,
};
pub use update_request::{SentUpdateRequest, UpdateRequest};
pub use user::{Account, Contact, Group, GroupMember, User, UserProfile};
pub use webhook::{Webhook, WebhookSharedSecret};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sheet_decodes_ignoring_unknown_fields() {
        let sheet: Sheet = serde_json::from_value(json!({
            "id": 42,
            "name": "Demo",
            "ganttEnabled": false,
            "columns": [{"id": 1, "title": "Task", "type": "TEXT_NUMBER", "primary": true}]
        }))
        .unwrap();
        assert_eq!(sheet.id, Some(42));
        assert_eq!(sheet.columns.unwrap()[0].kind.as_deref(), Some("TEXT_NUMBER"));
    }

    #[test]
    fn new_sheet_encodes_only_name_and_columns() {
        let sheet = Sheet {
            columns: Some(vec![Column {
                primary: Some(true),
                ..Column::new("Task", "TEXT_NUMBER")
            }]),
            ..Sheet::named("Plan")
        };
        assert_eq!(
            serde_json::to_value(&sheet).unwrap(),
            json!({
                "name": "Plan",
                "columns": [{"title": "Task", "type": "TEXT_NUMBER", "primary": true}]
            })
        );
    }

    #[test]
    fn container_destination_uses_lowercase_type() {
        let dest = ContainerDestination {
            destination_type: DestinationType::Folder,
            destination_id: Some(9),
            new_name: Some("Copy".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&dest).unwrap(),
            json!({"destinationType": "folder", "destinationId": 9, "newName": "Copy"})
        );
    }

    #[test]
    fn favorite_round_trip_shape() {
        let favorite: Favorite =
            serde_json::from_value(json!({"type": "sheet", "objectId": 5})).unwrap();
        assert_eq!(favorite.kind, FavoriteType::Sheet);
        assert_eq!(FavoriteType::Sight.path_segment(), "sights");
    }

    #[test]
    fn event_result_decodes_stream_position() {
        let result: EventResult = serde_json::from_value(json!({
            "nextStreamPosition": "XyzA",
            "moreAvailable": true,
            "data": [{"eventId": "e1", "objectType": "SHEET", "action": "CREATE", "objectId": 1}]
        }))
        .unwrap();
        assert!(result.more_available);
        assert_eq!(result.data[0].action.as_deref(), Some("CREATE"));
    }
}
