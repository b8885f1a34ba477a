//! Team endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::executor::RequestExecutor;
use ladder_core::{ApiBase, Payload, RequestDescriptor, Result};
use std::sync::Arc;
use tracing::instrument;

/// Team endpoints
pub struct TeamEndpoints {
  executor: Arc<RequestExecutor>,
}

impl TeamEndpoints {
  /// List the teams visible to the signed-in user
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Payload> {
    self.executor().execute(RequestDescriptor::get(ApiBase::Primary, "/v1/listTeams")).await
  }
}

impl_endpoint_base!(TeamEndpoints);

#[cfg(test)]
mod tests {
  use crate::endpoints::test_support::mock_client;
  use ladder_core::HttpMethod;
  use serde_json::json;

  #[tokio::test]
  async fn test_list_teams() {
    let (client, transport) = mock_client();
    transport.push_json(200, &json!({"teams": [{"id": "t1"}, {"id": "t2"}]}));

    let teams = client.teams().list().await.unwrap();

    assert_eq!(teams.as_json().unwrap()["teams"].as_array().unwrap().len(), 2);
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://rocky-api.prod.ltdev.io/v1/listTeams");
  }
}
