//! Workspace Persistence
//!
//! Workspace-name records live in browser local storage: a JSON array of
//! records plus a separately stored active-workspace id. The codec is
//! plain serde_json so it can be exercised off-browser.

use web_sys::Storage;

use crate::models::WorkspaceRecord;

const WORKSPACES_KEY: &str = "craftboard-workspaces";
const ACTIVE_KEY: &str = "craftboard-active-workspace";

/// Ids of the built-in workspaces that cannot be deleted
pub const BUILTIN_IDS: &[&str] = &["default", "work", "personal"];

/// The workspace set a fresh profile starts with
pub fn builtin_workspaces() -> Vec<WorkspaceRecord> {
    vec![
        WorkspaceRecord {
            id: "default".to_string(),
            name: "Default Workspace".to_string(),
            color: "#3b82f6".to_string(),
        },
        WorkspaceRecord {
            id: "work".to_string(),
            name: "Work Projects".to_string(),
            color: "#22c55e".to_string(),
        },
        WorkspaceRecord {
            id: "personal".to_string(),
            name: "Personal Tasks".to_string(),
            color: "#a855f7".to_string(),
        },
    ]
}

pub fn is_builtin(workspace_id: &str) -> bool {
    BUILTIN_IDS.contains(&workspace_id)
}

// ========================
// Codec
// ========================

pub fn encode_workspaces(workspaces: &[WorkspaceRecord]) -> Result<String, String> {
    serde_json::to_string(workspaces).map_err(|e| e.to_string())
}

/// Decode a stored workspace list; an empty list decodes to the built-ins
/// so the app never starts without a workspace to activate.
pub fn decode_workspaces(raw: &str) -> Result<Vec<WorkspaceRecord>, String> {
    let workspaces: Vec<WorkspaceRecord> =
        serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if workspaces.is_empty() {
        Ok(builtin_workspaces())
    } else {
        Ok(workspaces)
    }
}

// ========================
// Local Storage Access
// ========================

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Load the workspace list, falling back to the built-ins on a missing or
/// unreadable record.
pub fn load_workspaces() -> Vec<WorkspaceRecord> {
    let Some(storage) = local_storage() else {
        return builtin_workspaces();
    };
    match storage.get_item(WORKSPACES_KEY) {
        Ok(Some(raw)) => decode_workspaces(&raw).unwrap_or_else(|err| {
            web_sys::console::warn_1(
                &format!("[STORE] unreadable workspace record, using defaults: {}", err).into(),
            );
            builtin_workspaces()
        }),
        _ => builtin_workspaces(),
    }
}

pub fn save_workspaces(workspaces: &[WorkspaceRecord]) {
    let Some(storage) = local_storage() else { return };
    match encode_workspaces(workspaces) {
        Ok(encoded) => {
            let _ = storage.set_item(WORKSPACES_KEY, &encoded);
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("[STORE] workspace save failed: {}", err).into());
        }
    }
}

/// Load the active workspace id, if one was stored.
pub fn load_active_workspace() -> Option<String> {
    local_storage()?.get_item(ACTIVE_KEY).ok().flatten()
}

pub fn save_active_workspace(workspace_id: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACTIVE_KEY, workspace_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_round_trips() {
        let workspaces = vec![
            WorkspaceRecord { id: "default".into(), name: "Default Workspace".into(), color: "#3b82f6".into() },
            WorkspaceRecord { id: "workspace-4".into(), name: "Side Projects".into(), color: "#6b7280".into() },
        ];
        let encoded = encode_workspaces(&workspaces).unwrap();
        assert_eq!(decode_workspaces(&encoded).unwrap(), workspaces);
    }

    #[test]
    fn garbage_fails_to_decode() {
        assert!(decode_workspaces("not json").is_err());
        assert!(decode_workspaces("{\"id\":1}").is_err());
    }

    #[test]
    fn empty_list_decodes_to_builtins() {
        assert_eq!(decode_workspaces("[]").unwrap(), builtin_workspaces());
    }

    #[test]
    fn builtins_are_protected() {
        for id in BUILTIN_IDS {
            assert!(is_builtin(id));
        }
        assert!(!is_builtin("workspace-4"));
    }
}
