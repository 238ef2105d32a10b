use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub rule_usage: HashMap<String, u64>,
    pub severity_usage: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn increment_rule(&self, rule: &str) {
        let mut data = self.inner.write().await;
        *data.rule_usage.entry(rule.to_string()).or_insert(0) += 1;
    }

    pub async fn increment_severity(&self, severity: &str) {
        let mut data = self.inner.write().await;
        *data.severity_usage.entry(severity.to_string()).or_insert(0) += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
