//! Flow API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::kestra::KestraClient;

use super::models::Flow;

impl KestraClient {
    /// List all flows in a namespace
    pub async fn get_flows(&self, namespace: &str) -> Result<(Vec<Flow>, serde_json::Value)> {
        let url = format!("{}/{}/{}", self.base_url(), api::FLOWS, namespace);
        debug!("Fetching flows from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_with_raw(response, &format!("Flows in namespace '{}'", namespace))
            .await
    }

    /// Get a single flow by namespace and id
    pub async fn get_flow(
        &self,
        namespace: &str,
        flow_id: &str,
    ) -> Result<(Flow, serde_json::Value)> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::FLOWS,
            namespace,
            flow_id
        );
        debug!("Fetching flow from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_with_raw(response, &format!("Flow '{}/{}'", namespace, flow_id))
            .await
    }

    /// Deploy flow definitions to a namespace.
    ///
    /// Posts the YAML source as-is; `delete=false` keeps flows that are
    /// absent from the file instead of removing them from the namespace.
    pub async fn deploy_flows(
        &self,
        namespace: &str,
        source: String,
    ) -> Result<(Vec<Flow>, serde_json::Value)> {
        let url = format!(
            "{}/{}/{}?delete=false",
            self.base_url(),
            api::FLOWS,
            namespace
        );
        debug!("Deploying flows to: {}", url);

        let response = self.post_yaml(&url, source).send().await?;
        self.parse_with_raw(
            response,
            &format!("Deployment to namespace '{}'", namespace),
        )
        .await
    }
}
