use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A task row as listed for its owning user.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub task_id: i32,
    pub name: String,
    pub description: String,
}

/// The name/description projection returned when fetching one task by id.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TaskInfo {
    pub name: String,
    pub description: String,
}

/// Input payload for creating a task. Field names match the client contract.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[serde(rename = "taskName")]
    #[validate(length(min = 1, max = 200))]
    pub task_name: String,

    #[serde(rename = "taskDescription")]
    #[validate(length(max = 1000))]
    pub task_description: String,
}

/// Input payload for updating a task.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[serde(rename = "updatedTaskName")]
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[serde(rename = "updatedTaskDesc")]
    #[validate(length(max = 1000))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_task_request_deserializes_client_field_names() {
        let payload = r#"{"taskName": "Groceries", "taskDescription": "Milk and eggs"}"#;
        let request: CreateTaskRequest = serde_json::from_str(payload).unwrap();

        assert_eq!(request.task_name, "Groceries");
        assert_eq!(request.task_description, "Milk and eggs");
    }

    #[test]
    fn test_update_task_request_deserializes_client_field_names() {
        let payload = r#"{"updatedTaskName": "Groceries", "updatedTaskDesc": "Milk only"}"#;
        let request: UpdateTaskRequest = serde_json::from_str(payload).unwrap();

        assert_eq!(request.name, "Groceries");
        assert_eq!(request.description, "Milk only");
    }

    #[test]
    fn test_task_request_validation() {
        let valid = CreateTaskRequest {
            task_name: "Valid Task".to_string(),
            task_description: "A description".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateTaskRequest {
            task_name: "".to_string(),
            task_description: "A description".to_string(),
        };
        assert!(empty_name.validate().is_err());

        let long_name = CreateTaskRequest {
            task_name: "a".repeat(201),
            task_description: "A description".to_string(),
        };
        assert!(long_name.validate().is_err());

        let long_description = UpdateTaskRequest {
            name: "Valid".to_string(),
            description: "b".repeat(1001),
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_task_serializes_for_listing() {
        let task = Task {
            task_id: 4,
            name: "Groceries".to_string(),
            description: "Milk and eggs".to_string(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["task_id"], 4);
        assert_eq!(json["name"], "Groceries");
        assert_eq!(json["description"], "Milk and eggs");
    }
}
