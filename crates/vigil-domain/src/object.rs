//! Monitoring-backend objects and their weakly-typed vars

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Var key carrying the owning controller instance's cluster tag.
pub const VAR_CLUSTER: &str = "cluster";

/// Var key carrying the `namespace/name` key of the originating resource.
pub const VAR_OWNER: &str = "owner";

/// Free-form metadata attached to a monitoring object.
///
/// The backend stores vars as arbitrary JSON, so values are weakly typed.
/// Callers that need the cluster tag go through [`Vars::cluster`]; the owner
/// var is decoded with [`crate::OwnerKey::decode`] rather than read directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vars(HashMap<String, Value>);

impl Vars {
    /// Create an empty vars mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a var, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a raw var value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `cluster` tag, if present and string-valued.
    pub fn cluster(&self) -> Option<&str> {
        self.0.get(VAR_CLUSTER).and_then(Value::as_str)
    }

    /// The raw `owner` var. May be absent, empty, or a non-string value.
    pub fn owner(&self) -> Option<&Value> {
        self.0.get(VAR_OWNER)
    }
}

/// A host group mirrored into the monitoring backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostGroup {
    /// Backend object name.
    pub name: String,
    /// Provenance vars, absent when the object carries none.
    pub vars: Option<Vars>,
}

/// A host mirrored into the monitoring backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    /// Backend object name.
    pub name: String,
    /// Provenance vars, absent when the object carries none.
    pub vars: Option<Vars>,
}

/// A service check mirrored into the monitoring backend.
///
/// Checks live under a host and are addressed by the compound
/// [`full_name`](Check::full_name) form when deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Name of the host the check is attached to.
    pub host: String,
    /// Check name, unique within its host.
    pub name: String,
    /// Provenance vars, absent when the object carries none.
    pub vars: Option<Vars>,
}

impl Check {
    /// Compound identifier the backend expects when deleting a check.
    pub fn full_name(&self) -> String {
        format!("{}!{}", self.host, self.name)
    }
}

/// Uniform view over the three monitoring object kinds.
///
/// Lets one sweep pass handle host groups, hosts and checks without
/// duplicating the control flow.
pub trait MonitoredObject {
    /// Name used in log lines.
    fn name(&self) -> &str;

    /// Provenance vars, if any.
    fn vars(&self) -> Option<&Vars>;

    /// Identifier passed to the backend's delete call.
    fn delete_name(&self) -> String;
}

impl MonitoredObject for HostGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn vars(&self) -> Option<&Vars> {
        self.vars.as_ref()
    }

    fn delete_name(&self) -> String {
        self.name.clone()
    }
}

impl MonitoredObject for Host {
    fn name(&self) -> &str {
        &self.name
    }

    fn vars(&self) -> Option<&Vars> {
        self.vars.as_ref()
    }

    fn delete_name(&self) -> String {
        self.name.clone()
    }
}

impl MonitoredObject for Check {
    fn name(&self) -> &str {
        &self.name
    }

    fn vars(&self) -> Option<&Vars> {
        self.vars.as_ref()
    }

    fn delete_name(&self) -> String {
        self.full_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_var_requires_string() {
        let mut vars = Vars::new();
        vars.insert(VAR_CLUSTER, 42);
        assert_eq!(vars.cluster(), None);

        vars.insert(VAR_CLUSTER, "prod");
        assert_eq!(vars.cluster(), Some("prod"));
    }

    #[test]
    fn test_owner_var_is_raw() {
        let mut vars = Vars::new();
        assert!(vars.owner().is_none());

        vars.insert(VAR_OWNER, 42);
        assert_eq!(vars.owner(), Some(&Value::from(42)));
    }

    #[test]
    fn test_check_full_name() {
        let check = Check {
            host: "web-1".to_string(),
            name: "disk".to_string(),
            vars: None,
        };
        assert_eq!(check.full_name(), "web-1!disk");
        assert_eq!(check.delete_name(), "web-1!disk");
    }

    #[test]
    fn test_delete_name_for_flat_kinds() {
        let group = HostGroup {
            name: "apps".to_string(),
            vars: None,
        };
        let host = Host {
            name: "web-1".to_string(),
            vars: None,
        };
        assert_eq!(group.delete_name(), "apps");
        assert_eq!(host.delete_name(), "web-1");
    }

    #[test]
    fn test_vars_serde_is_transparent() {
        let mut vars = Vars::new();
        vars.insert(VAR_CLUSTER, "prod");
        let json = serde_json::to_value(&vars).unwrap();
        assert_eq!(json, serde_json::json!({"cluster": "prod"}));
    }
}
