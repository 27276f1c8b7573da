//! Rendered document sets shared across harnesses.
//!
//! The JSON texts stand in for the output of a template render; they are
//! parsed through [`chartcheck::documents_from_json`] exactly as an
//! embedding runner would hand them over.

use chartcheck::{documents_from_json, Document};

/// `Service foo` in namespace `bar`, then `Service bar` in namespace `foo`.
pub const TWO_SERVICES: &str = r#"[
  { "apiVersion": "v1", "kind": "Service", "metadata": { "name": "foo", "namespace": "bar" } },
  { "apiVersion": "v1", "kind": "Service", "metadata": { "name": "bar", "namespace": "foo" } }
]"#;

/// A small chart: workload, its service, config, and a cluster-scoped role.
pub const CHART_RENDER: &str = r#"[
  { "apiVersion": "apps/v1", "kind": "Deployment", "metadata": { "name": "web", "namespace": "prod" },
    "spec": { "replicas": 3 } },
  { "apiVersion": "v1", "kind": "Service", "metadata": { "name": "web", "namespace": "prod" } },
  { "apiVersion": "v1", "kind": "ConfigMap", "metadata": { "name": "web-config", "namespace": "prod" } },
  { "apiVersion": "rbac.authorization.k8s.io/v1", "kind": "ClusterRole", "metadata": { "name": "web-reader" } }
]"#;

pub fn two_services() -> Vec<Document> {
    documents_from_json(TWO_SERVICES).expect("TWO_SERVICES fixture must parse")
}

pub fn chart_render() -> Vec<Document> {
    documents_from_json(CHART_RENDER).expect("CHART_RENDER fixture must parse")
}
