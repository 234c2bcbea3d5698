//! Dataset upload handlers.

use axum::Json;
use axum::extract::{Multipart, Query, State};
use feedlens_transform::{TablePreview, read_csv, transform};

use crate::Result;
use crate::handler::request::IngestParams;
use crate::handler::response::IngestReport;
use crate::state::AppState;

/// Tracing target for dataset operations.
const TRACING_TARGET: &str = "feedlens_server::handler::datasets";

/// Parses an uploaded CSV and returns its preview statistics.
#[tracing::instrument(skip_all)]
pub(super) async fn preview_dataset(
    State(_state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TablePreview>> {
    let upload = read_upload(multipart).await?;
    let table = read_csv(upload.as_slice())?;

    tracing::debug!(
        target: TRACING_TARGET,
        rows = table.len(),
        columns = table.headers().len(),
        "Dataset previewed"
    );

    Ok(Json(TablePreview::of(&table)))
}

/// Transforms an uploaded CSV and bulk-inserts the documents.
#[tracing::instrument(skip_all)]
pub(super) async fn ingest_dataset(
    State(state): State<AppState>,
    Query(params): Query<IngestParams>,
    multipart: Multipart,
) -> Result<Json<IngestReport>> {
    let sink = state.sink()?;
    let collection = state.resolve_collection(params.collection)?;

    let upload = read_upload(multipart).await?;
    let table = read_csv(upload.as_slice())?;
    let documents = transform(&table)?;

    let inserted = sink.insert_many(&collection, &documents).await?;

    tracing::info!(
        target: TRACING_TARGET,
        collection = %collection,
        documents = documents.len(),
        inserted,
        "Dataset ingested"
    );

    Ok(Json(IngestReport {
        collection,
        documents: documents.len(),
        inserted,
    }))
}

/// Reads the uploaded file part out of a multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>> {
    while let Some(field) = multipart.next_field().await? {
        let is_file = field.name() == Some("file") || field.file_name().is_some();
        if is_file {
            return Ok(field.bytes().await?.to_vec());
        }
    }

    Err(feedlens_core::Error::validation("a CSV file part is required").into())
}
