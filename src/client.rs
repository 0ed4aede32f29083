// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::MonthWindow;
use crate::models::{Asset, AssetCategory, PageInfo, Record, RecordType, Tag, User};
use crate::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not authenticated; run 'kakebo auth login' first")]
    Unauthenticated,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected the operation: {}", messages.join("; "))]
    Api { messages: Vec<String> },
    #[error("malformed server response: {0}")]
    Protocol(String),
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorExtensions {
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
    #[serde(default)]
    extensions: Option<GraphqlErrorExtensions>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

/// POST body for one GraphQL operation.
pub fn request_body(query: &str, variables: Value) -> Value {
    json!({ "query": query, "variables": variables })
}

/// Map a raw response body to either its `data` payload or the error class
/// the caller has to react to. An error carrying the UNAUTHENTICATED
/// extension code is an auth failure, everything else is surfaced verbatim.
pub fn decode_response(body: &str) -> Result<Value, ClientError> {
    let resp: GraphqlResponse = serde_json::from_str(body)
        .map_err(|e| ClientError::Protocol(format!("invalid GraphQL envelope: {e}")))?;
    if let Some(errors) = resp.errors {
        if !errors.is_empty() {
            if errors.iter().any(|e| {
                e.extensions
                    .as_ref()
                    .and_then(|x| x.code.as_deref())
                    .is_some_and(|code| code == "UNAUTHENTICATED")
            }) {
                return Err(ClientError::Unauthenticated);
            }
            return Err(ClientError::Api {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }
    }
    resp.data
        .filter(|d| !d.is_null())
        .ok_or_else(|| ClientError::Protocol("response carried neither data nor errors".into()))
}

/// Conjunctive monthly-record filters; an empty dimension means no constraint
/// and is left out of the variables entirely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub asset_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub record_types: Vec<RecordType>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.tag_names.is_empty() && self.asset_ids.is_empty() && self.record_types.is_empty()
    }
}

/// Input for the income and expense record mutations; the two GraphQL input
/// types share this shape. Tags travel as names, the server resolves or
/// creates them.
#[derive(Debug, Clone, Serialize)]
pub struct RecordInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub at: DateTime<Utc>,
    #[serde(rename = "assetID")]
    pub asset_id: String,
    pub amount: i64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub at: DateTime<Utc>,
    #[serde(rename = "fromAssetID")]
    pub from_asset_id: String,
    #[serde(rename = "toAssetID")]
    pub to_asset_id: String,
    pub amount: i64,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecordsPage {
    pub nodes: Vec<Record>,
    pub page_info: PageInfo,
    /// Server-authoritative total assets at the end of the fetched range.
    pub total_assets: i64,
}

fn encode<T: Serialize>(value: &T) -> Result<Value, ClientError> {
    serde_json::to_value(value).map_err(|e| ClientError::Protocol(format!("input encoding: {e}")))
}

const RECORD_FIELDS: &str = "id recordType title description at \
    assetChangeIncome { asset { id name } amount } \
    assetChangeExpense { asset { id name } amount } \
    tags { id name }";

pub struct GraphqlClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    session: Option<Session>,
}

impl GraphqlClient {
    pub fn new(endpoint: String, session: Option<Session>) -> anyhow::Result<Self> {
        Ok(Self {
            http: crate::utils::http_client()?,
            endpoint,
            session,
        })
    }

    /// One blocking round trip. A request with no resolvable credential fails
    /// before anything is dispatched.
    fn execute(&self, query: &str, variables: Value) -> Result<Value, ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::Unauthenticated)?;
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&session.access_token)
            .json(&request_body(query, variables))
            .send()?;
        let body = resp.text()?;
        decode_response(&body)
    }

    fn query_field<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<T, ClientError> {
        let mut data = self.execute(query, variables)?;
        let value = data
            .get_mut(field)
            .map(Value::take)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ClientError::Protocol(format!("response missing field '{field}'")))?;
        serde_json::from_value(value)
            .map_err(|e| ClientError::Protocol(format!("unexpected shape for '{field}': {e}")))
    }

    fn nodes<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        field: &str,
    ) -> Result<Vec<T>, ClientError> {
        #[derive(Deserialize)]
        struct Connection<T> {
            nodes: Vec<T>,
        }
        let conn: Connection<T> = self.query_field(query, json!({}), field)?;
        Ok(conn.nodes)
    }

    pub fn monthly_records(
        &self,
        window: MonthWindow,
        filter: &RecordFilter,
    ) -> Result<MonthlyRecordsPage, ClientError> {
        let query = format!(
            "query MonthlyRecords($year: Int!, $month: Int!, $tagNames: [String!], \
             $assetIds: [ID!], $recordTypes: [RecordType!]) {{ \
             recordsPerMonth(first: 100, year: $year, month: $month, tagNames: $tagNames, \
             assetIds: $assetIds, recordTypes: $recordTypes) {{ \
             nodes {{ {RECORD_FIELDS} }} \
             pageInfo {{ hasNextPage hasPreviousPage startCursor endCursor }} \
             totalAssets }} }}"
        );
        let mut variables = encode(filter)?;
        variables["year"] = json!(window.year);
        variables["month"] = json!(window.month);
        self.query_field(&query, variables, "recordsPerMonth")
    }

    pub fn record(&self, id: &str) -> Result<Record, ClientError> {
        let query =
            format!("query GetRecord($id: ID!) {{ record(id: $id) {{ {RECORD_FIELDS} }} }}");
        self.query_field(&query, json!({ "id": id }), "record")
    }

    pub fn assets(&self) -> Result<Vec<Asset>, ClientError> {
        self.nodes(
            "query GetAssets { assets(first: 100) { nodes { id name category { id name } } } }",
            "assets",
        )
    }

    pub fn tags(&self) -> Result<Vec<Tag>, ClientError> {
        self.nodes(
            "query GetTags { tags(first: 100) { nodes { id name } } }",
            "tags",
        )
    }

    pub fn asset_categories(&self) -> Result<Vec<AssetCategory>, ClientError> {
        self.nodes(
            "query GetAssetCategories { assetCategories(first: 100) \
             { nodes { id name assets { id name } } } }",
            "assetCategories",
        )
    }

    pub fn user(&self) -> Result<User, ClientError> {
        self.query_field("query GetUser { user { id name } }", json!({}), "user")
    }

    fn record_mutation(
        &self,
        name: &str,
        input_type: &str,
        input: Value,
    ) -> Result<Record, ClientError> {
        let query = format!(
            "mutation {name}($input: {input_type}!) {{ \
             {name}(input: $input) {{ {RECORD_FIELDS} }} }}"
        );
        self.query_field(&query, json!({ "input": input }), name)
    }

    pub fn create_income_record(&self, input: &RecordInput) -> Result<Record, ClientError> {
        self.record_mutation(
            "createIncomeRecord",
            "createIncomeRecordInput",
            encode(input)?,
        )
    }

    pub fn create_expense_record(&self, input: &RecordInput) -> Result<Record, ClientError> {
        self.record_mutation(
            "createExpenseRecord",
            "createExpenseRecordInput",
            encode(input)?,
        )
    }

    pub fn create_transfer_record(&self, input: &TransferInput) -> Result<Record, ClientError> {
        self.record_mutation(
            "createTransferRecord",
            "createTransferRecordInput",
            encode(input)?,
        )
    }

    pub fn update_income_record(&self, input: &RecordInput) -> Result<Record, ClientError> {
        self.record_mutation(
            "updateIncomeRecord",
            "updateIncomeRecordInput",
            encode(input)?,
        )
    }

    pub fn update_expense_record(&self, input: &RecordInput) -> Result<Record, ClientError> {
        self.record_mutation(
            "updateExpenseRecord",
            "updateExpenseRecordInput",
            encode(input)?,
        )
    }

    pub fn update_transfer_record(&self, input: &TransferInput) -> Result<Record, ClientError> {
        self.record_mutation(
            "updateTransferRecord",
            "updateTransferRecordInput",
            encode(input)?,
        )
    }

    pub fn delete_record(&self, id: &str) -> Result<(), ClientError> {
        self.execute(
            "mutation DeleteRecord($id: ID!) { deleteRecord(id: $id) { id } }",
            json!({ "id": id }),
        )?;
        Ok(())
    }

    pub fn create_asset(
        &self,
        name: &str,
        category_id: Option<&str>,
    ) -> Result<Asset, ClientError> {
        self.query_field(
            "mutation CreateAsset($name: String!, $categoryId: ID) { \
             createAsset(input: { name: $name, categoryId: $categoryId }) \
             { id name category { id name } } }",
            json!({ "name": name, "categoryId": category_id }),
            "createAsset",
        )
    }

    pub fn update_asset(
        &self,
        id: &str,
        name: &str,
        category_id: Option<&str>,
    ) -> Result<Asset, ClientError> {
        self.query_field(
            "mutation UpdateAsset($id: ID!, $name: String!, $categoryId: ID) { \
             updateAsset(input: { id: $id, name: $name, categoryId: $categoryId }) \
             { id name category { id name } } }",
            json!({ "id": id, "name": name, "categoryId": category_id }),
            "updateAsset",
        )
    }

    pub fn delete_asset(&self, id: &str) -> Result<(), ClientError> {
        self.execute(
            "mutation DeleteAsset($id: ID!) { deleteAsset(id: $id) { id } }",
            json!({ "id": id }),
        )?;
        Ok(())
    }

    pub fn create_asset_category(&self, name: &str) -> Result<AssetCategory, ClientError> {
        self.query_field(
            "mutation CreateAssetCategory($name: String!) { \
             createAssetCategory(input: { name: $name }) { id name assets { id name } } }",
            json!({ "name": name }),
            "createAssetCategory",
        )
    }

    pub fn update_asset_category(&self, id: &str, name: &str) -> Result<AssetCategory, ClientError> {
        self.query_field(
            "mutation UpdateAssetCategory($id: ID!, $name: String!) { \
             updateAssetCategory(input: { id: $id, name: $name }) { id name assets { id name } } }",
            json!({ "id": id, "name": name }),
            "updateAssetCategory",
        )
    }

    pub fn delete_asset_category(&self, id: &str) -> Result<(), ClientError> {
        self.execute(
            "mutation DeleteAssetCategory($id: ID!) { \
             deleteAssetCategory(input: { id: $id }) { id } }",
            json!({ "id": id }),
        )?;
        Ok(())
    }

    pub fn create_tag(&self, name: &str) -> Result<Tag, ClientError> {
        self.query_field(
            "mutation CreateTag($name: String!) { createTag(input: { name: $name }) { id name } }",
            json!({ "name": name }),
            "createTag",
        )
    }

    pub fn update_tag(&self, id: &str, name: &str) -> Result<Tag, ClientError> {
        self.query_field(
            "mutation UpdateTag($id: ID!, $name: String!) { \
             updateTag(input: { id: $id, name: $name }) { id name } }",
            json!({ "id": id, "name": name }),
            "updateTag",
        )
    }

    pub fn delete_tag(&self, id: &str) -> Result<(), ClientError> {
        self.execute(
            "mutation DeleteTag($id: ID!) { deleteTag(input: { id: $id }) { id } }",
            json!({ "id": id }),
        )?;
        Ok(())
    }
}
