// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use kakebo::client::{
    ClientError, GraphqlClient, MonthlyRecordsPage, RecordFilter, RecordInput, TransferInput,
    decode_response, request_body,
};
use kakebo::models::RecordType;
use serde_json::json;

#[test]
fn missing_credential_fails_before_dispatch() {
    // Nothing listens on this endpoint; a transport error here would mean the
    // request went out despite the missing credential.
    let client = GraphqlClient::new("http://127.0.0.1:1/query".into(), None).unwrap();
    assert!(matches!(client.user(), Err(ClientError::Unauthenticated)));
    assert!(matches!(
        client.tags(),
        Err(ClientError::Unauthenticated)
    ));
}

#[test]
fn request_body_wraps_query_and_variables() {
    let body = request_body("query Q { user { id } }", json!({ "year": 2025 }));
    assert_eq!(body["query"], "query Q { user { id } }");
    assert_eq!(body["variables"]["year"], 2025);
}

#[test]
fn decode_returns_data_payload() {
    let data = decode_response(r#"{"data":{"user":{"id":"u1","name":"mio"}}}"#).unwrap();
    assert_eq!(data["user"]["name"], "mio");
}

#[test]
fn unauthenticated_extension_code_maps_to_auth_error() {
    let body = r#"{"errors":[{"message":"signed out","extensions":{"code":"UNAUTHENTICATED"}}]}"#;
    assert!(matches!(
        decode_response(body),
        Err(ClientError::Unauthenticated)
    ));
}

#[test]
fn other_graphql_errors_surface_verbatim() {
    let body = r#"{"errors":[{"message":"asset not found"},{"message":"bad input"}]}"#;
    match decode_response(body) {
        Err(ClientError::Api { messages }) => {
            assert_eq!(messages, vec!["asset not found", "bad input"]);
        }
        other => panic!("expected Api error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn empty_envelope_is_a_protocol_error() {
    assert!(matches!(
        decode_response(r#"{}"#),
        Err(ClientError::Protocol(_))
    ));
    assert!(matches!(
        decode_response("not json at all"),
        Err(ClientError::Protocol(_))
    ));
}

#[test]
fn empty_filter_sends_no_constraints() {
    let vars = serde_json::to_value(RecordFilter::default()).unwrap();
    assert_eq!(vars, json!({}));
}

#[test]
fn filter_dimensions_serialize_conjunctively() {
    let filter = RecordFilter {
        tag_names: vec!["food".into()],
        asset_ids: vec!["a1".into(), "a2".into()],
        record_types: vec![RecordType::Expense, RecordType::Transfer],
    };
    let vars = serde_json::to_value(&filter).unwrap();
    assert_eq!(vars["tagNames"], json!(["food"]));
    assert_eq!(vars["assetIds"], json!(["a1", "a2"]));
    assert_eq!(vars["recordTypes"], json!(["EXPENSE", "TRANSFER"]));
}

#[test]
fn record_input_uses_wire_field_names() {
    let input = RecordInput {
        id: None,
        title: "groceries".into(),
        description: String::new(),
        at: Utc.with_ymd_and_hms(2025, 8, 10, 12, 0, 0).unwrap(),
        asset_id: "a1".into(),
        amount: 1200,
        tags: vec!["food".into()],
    };
    let v = serde_json::to_value(&input).unwrap();
    assert_eq!(v["assetID"], "a1");
    assert_eq!(v["amount"], 1200);
    assert!(v.get("id").is_none(), "unset id must be omitted");

    let mut update = input.clone();
    update.id = Some("r1".into());
    let v = serde_json::to_value(&update).unwrap();
    assert_eq!(v["id"], "r1");
}

#[test]
fn transfer_input_names_both_legs() {
    let input = TransferInput {
        id: None,
        title: "move savings".into(),
        description: String::new(),
        at: Utc.with_ymd_and_hms(2025, 8, 10, 12, 0, 0).unwrap(),
        from_asset_id: "a1".into(),
        to_asset_id: "a2".into(),
        amount: 50000,
        tags: vec![],
    };
    let v = serde_json::to_value(&input).unwrap();
    assert_eq!(v["fromAssetID"], "a1");
    assert_eq!(v["toAssetID"], "a2");
}

#[test]
fn monthly_page_deserializes_server_shape() {
    let raw = json!({
        "nodes": [{
            "id": "r1",
            "recordType": "EXPENSE",
            "title": "lunch",
            "description": "ramen",
            "at": "2025-08-10T03:30:00Z",
            "assetChangeExpense": {
                "asset": { "id": "a1", "name": "Wallet" },
                "amount": -900
            },
            "tags": [{ "id": "t1", "name": "food" }]
        }],
        "pageInfo": {
            "hasNextPage": false,
            "hasPreviousPage": false,
            "startCursor": "c1",
            "endCursor": "c1"
        },
        "totalAssets": 123456
    });
    let page: MonthlyRecordsPage = serde_json::from_value(raw).unwrap();
    assert_eq!(page.total_assets, 123456);
    assert_eq!(page.nodes.len(), 1);
    let record = &page.nodes[0];
    assert_eq!(record.record_type, "EXPENSE");
    assert_eq!(record.asset_change_expense.as_ref().unwrap().amount, -900);
    assert!(record.asset_change_income.is_none());
    assert_eq!(record.tags[0].name, "food");
    assert_eq!(record.asset_label(), "Wallet");
}
