use std::time::Duration;

use async_trait::async_trait;

use crate::capture::run_capture;
use crate::error::ExecResult;
use crate::source::Fetch;

/// Inventory source: `kubectl get deployments -o json`, scoped to one
/// namespace or to all namespaces.
#[derive(Debug, Clone)]
pub struct KubectlSource {
    namespace: Option<String>,
    deadline: Option<Duration>,
}

impl KubectlSource {
    /// Create a source for the given namespace.
    ///
    /// `None` or an empty string scopes the listing to all namespaces.
    pub fn new(namespace: Option<String>, deadline: Option<Duration>) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.is_empty()),
            deadline,
        }
    }

    fn args(&self) -> Vec<&str> {
        let mut args = vec!["get", "deployments", "-o", "json"];
        match &self.namespace {
            Some(ns) => {
                args.push("-n");
                args.push(ns);
            }
            None => args.push("--all-namespaces"),
        }
        args
    }
}

#[async_trait]
impl Fetch for KubectlSource {
    fn name(&self) -> &'static str {
        "kubectl"
    }

    async fn fetch(&self) -> ExecResult<Vec<u8>> {
        run_capture("kubectl", &self.args(), self.deadline).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_namespace_means_all_namespaces() {
        let source = KubectlSource::new(None, None);
        assert_eq!(
            source.args(),
            vec!["get", "deployments", "-o", "json", "--all-namespaces"]
        );
    }

    #[test]
    fn empty_namespace_means_all_namespaces() {
        let source = KubectlSource::new(Some(String::new()), None);
        assert_eq!(
            source.args(),
            vec!["get", "deployments", "-o", "json", "--all-namespaces"]
        );
    }

    #[test]
    fn explicit_namespace_scopes_the_listing() {
        let source = KubectlSource::new(Some("mytnt2".into()), None);
        assert_eq!(
            source.args(),
            vec!["get", "deployments", "-o", "json", "-n", "mytnt2"]
        );
    }
}
