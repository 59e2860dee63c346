//! Data model for the Salesforce CLI's JSON preview report.

use serde::Deserialize;

/// Top-level document emitted by `sf project deploy preview --json`.
///
/// The CLI uses the same envelope for success reports and for tool-level
/// errors; error reports carry `name`/`message`/`exitCode` and no `result`.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewResult {
    #[serde(default)]
    pub status: i32,

    /// Error class name, present on tool-level errors (e.g. `SfError`)
    #[serde(default)]
    pub name: Option<String>,

    /// Human-readable error message, present on tool-level errors
    #[serde(default)]
    pub message: Option<String>,

    /// Exit code the tool reports for itself on errors
    #[serde(default, rename = "exitCode")]
    pub exit_code: Option<i32>,

    #[serde(default)]
    pub result: Option<PreviewDetails>,

    #[serde(default)]
    pub warnings: Vec<String>,
}

/// `result` payload of a preview report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewDetails {
    /// Components that would be deployed. Older sf releases emitted this
    /// list under `toDeploy`.
    #[serde(default, alias = "toDeploy")]
    pub files: Vec<MetadataComponent>,

    /// Components whose remote and local versions diverge
    #[serde(default)]
    pub conflicts: Vec<MetadataComponent>,
}

/// One deployable metadata unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetadataComponent {
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    #[serde(default)]
    pub path: String,
}

impl MetadataComponent {
    /// `type:fullName`, the identifier the deploy command's `--metadata`
    /// flag expects. Unique per component within one preview.
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.type_name, self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_successful_preview() {
        let json = r#"{
            "status": 0,
            "result": {
                "ignored": [],
                "conflicts": [],
                "files": [
                    {
                        "type": "Profile",
                        "fullName": "Admin",
                        "projectRelativePath": "force-app/main/default/profiles/Admin.profile-meta.xml",
                        "path": "/work/force-app/main/default/profiles/Admin.profile-meta.xml",
                        "operation": "deploy"
                    }
                ]
            },
            "warnings": []
        }"#;

        let preview: PreviewResult = serde_json::from_str(json).unwrap();
        assert_eq!(preview.status, 0);
        let result = preview.result.unwrap();
        assert_eq!(result.files.len(), 1);
        assert!(result.conflicts.is_empty());
        assert_eq!(result.files[0].identifier(), "Profile:Admin");
    }

    #[test]
    fn test_parse_legacy_to_deploy_key() {
        let json = r#"{
            "status": 0,
            "result": {
                "toDeploy": [
                    {"type": "ApexClass", "fullName": "AccountService", "path": "classes/AccountService.cls"}
                ],
                "conflicts": []
            },
            "warnings": []
        }"#;

        let preview: PreviewResult = serde_json::from_str(json).unwrap();
        let result = preview.result.unwrap();
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].identifier(), "ApexClass:AccountService");
    }

    #[test]
    fn test_parse_conflict_report() {
        let json = r#"{
            "status": 1,
            "result": {
                "files": [],
                "conflicts": [
                    {"type": "Profile", "fullName": "Admin", "path": "profiles/Admin.profile-meta.xml"}
                ]
            },
            "warnings": ["Found 1 conflict"]
        }"#;

        let preview: PreviewResult = serde_json::from_str(json).unwrap();
        assert_eq!(preview.status, 1);
        let result = preview.result.unwrap();
        assert_eq!(result.conflicts.len(), 1);
        assert_eq!(preview.warnings, vec!["Found 1 conflict"]);
    }

    #[test]
    fn test_parse_tool_error_report() {
        let json = r#"{
            "name": "InvalidProjectWorkspaceError",
            "message": "This directory does not contain a valid Salesforce DX project.",
            "exitCode": 1,
            "status": 1,
            "warnings": []
        }"#;

        let preview: PreviewResult = serde_json::from_str(json).unwrap();
        assert_eq!(preview.status, 1);
        assert!(preview.result.is_none());
        assert_eq!(preview.name.as_deref(), Some("InvalidProjectWorkspaceError"));
        assert_eq!(preview.exit_code, Some(1));
    }

    #[test]
    fn test_missing_fields_default() {
        let preview: PreviewResult = serde_json::from_str("{}").unwrap();
        assert_eq!(preview.status, 0);
        assert!(preview.result.is_none());
        assert!(preview.warnings.is_empty());
    }
}
