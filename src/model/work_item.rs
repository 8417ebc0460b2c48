use serde::{Deserialize, Serialize};

/// Response of the Azure Boards work-items-batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItemsBatchResponse {
    pub count: usize,
    pub value: Vec<WorkItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u64,
    /// API url of the work item in the tracker.
    pub url: String,
    pub fields: WorkItemFields,
}

/// The fields the linker renders, keyed by their Azure Boards reference names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItemFields {
    #[serde(rename = "System.Id")]
    pub id: u64,
    #[serde(rename = "System.Title")]
    pub title: String,
    #[serde(rename = "System.WorkItemType")]
    pub work_item_type: String,
    #[serde(rename = "System.State")]
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_batch_response() {
        let json = r#"{
            "count": 1,
            "value": [
                {
                    "id": 297,
                    "url": "https://dev.azure.com/org/_apis/wit/workItems/297",
                    "fields": {
                        "System.Id": 297,
                        "System.Title": "Customer can sign in",
                        "System.WorkItemType": "User Story",
                        "System.State": "Active"
                    }
                }
            ]
        }"#;

        let batch: WorkItemsBatchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(batch.count, 1);
        assert_eq!(batch.value[0].id, 297);
        assert_eq!(batch.value[0].fields.work_item_type, "User Story");
        assert_eq!(batch.value[0].fields.state, "Active");
    }

    #[test]
    fn rejects_batch_without_value() {
        let result: Result<WorkItemsBatchResponse, _> = serde_json::from_str(r#"{"count": 0}"#);
        assert!(result.is_err());
    }
}
