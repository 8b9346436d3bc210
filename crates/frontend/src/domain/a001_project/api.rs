use contracts::domain::a001_project::{Project, ProjectStatus};

use crate::shared::api::{ApiClient, ApiError, Endpoint, HttpTransport};

/// List projects, optionally only those in `status`
pub async fn get_projects<T: HttpTransport>(
    client: &ApiClient<T>,
    status: Option<ProjectStatus>,
) -> Result<Vec<Project>, ApiError> {
    let endpoint = Endpoint::new("/projects").param_opt("status", status.map(|s| s.code()));
    client.fetch_json(&endpoint).await
}

/// Get a project by ID
pub async fn get_project<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<Project, ApiError> {
    let endpoint = Endpoint::new(format!("/projects/{}", urlencoding::encode(id)));
    client.fetch_json(&endpoint).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{client_for, FakeTransport};
    use contracts::domain::a001_project::ProjectType;
    use futures::executor::block_on;
    use serde_json::json;

    fn roof_a() -> serde_json::Value {
        json!([{
            "id": "p1",
            "name": "Roof A",
            "address": "123 Oak Street, Sacramento, CA",
            "customer": "John Smith",
            "status": "planning",
            "createdAt": "2025-06-08",
            "type": "residential"
        }])
    }

    #[test]
    fn test_get_projects_by_status() {
        let transport = FakeTransport::default();
        transport.respond_json("/projects?status=planning", 200, &roof_a());
        let client = client_for(&transport);

        let projects = block_on(get_projects(&client, Some(ProjectStatus::Planning))).unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "p1");
        assert_eq!(projects[0].name, "Roof A");
        assert_eq!(projects[0].status, ProjectStatus::Planning);
        assert_eq!(projects[0].project_type, ProjectType::Residential);
        assert_eq!(serde_json::to_value(&projects).unwrap(), roof_a());
    }

    #[test]
    fn test_get_projects_without_filter_sends_no_query() {
        let transport = FakeTransport::default();
        transport.respond("/projects", 200, "[]");
        let client = client_for(&transport);

        let projects = block_on(get_projects(&client, None)).unwrap();

        assert!(projects.is_empty());
        assert_eq!(transport.requests(), vec!["http://api.test/projects"]);
    }

    #[test]
    fn test_get_projects_is_idempotent() {
        let transport = FakeTransport::default();
        transport.respond_json("/projects?status=planning", 200, &roof_a());
        let client = client_for(&transport);

        let first = block_on(get_projects(&client, Some(ProjectStatus::Planning))).unwrap();
        let second = block_on(get_projects(&client, Some(ProjectStatus::Planning))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_project_not_found() {
        let transport = FakeTransport::default();
        transport.respond("/projects/missing", 404, r#"{"detail":"Project not found"}"#);
        let client = client_for(&transport);

        let err = block_on(get_project(&client, "missing")).unwrap_err();
        assert_eq!(err.status, 404);
        assert_eq!(err.message, "HTTP error! status: 404");
    }

    #[test]
    fn test_get_project_encodes_id() {
        let transport = FakeTransport::default();
        let client = client_for(&transport);

        let _ = block_on(get_project(&client, "a/b c"));
        assert_eq!(transport.requests(), vec!["http://api.test/projects/a%2Fb%20c"]);
    }

    #[test]
    fn test_mismatched_shape_is_network_error() {
        let transport = FakeTransport::default();
        transport.respond("/projects/p1", 200, r#"{"id":"p1"}"#);
        let client = client_for(&transport);

        let err = block_on(get_project(&client, "p1")).unwrap_err();
        assert!(err.is_network());
        assert!(err.message.starts_with("Network error: "));
    }
}
