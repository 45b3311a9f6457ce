use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entry in the document listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: String,
    pub user_count: usize,
}

/// Request body for creating a document
#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
pub struct CreateDocumentRequest {
    pub id: Option<String>,
    pub content: Option<String>,
}

/// Response for creating a document
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateDocumentResponse {
    pub id: String,
}
