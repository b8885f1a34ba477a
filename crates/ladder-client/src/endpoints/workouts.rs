/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Workout, workout session and movement endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::executor::RequestExecutor;
use ladder_core::error::require;
use ladder_core::{ApiBase, Error, IdList, Payload, Query, RequestDescriptor, Result};
use std::sync::Arc;
use tracing::instrument;
use urlencoding::encode;

/// Workout endpoints
pub struct WorkoutEndpoints {
  executor: Arc<RequestExecutor>,
}

impl WorkoutEndpoints {
  /// Get a workout definition from the secondary host
  ///
  /// The identifier is percent-encoded into the path, so reserved characters
  /// cannot escape the `/api/workouts/` segment.
  #[instrument(skip(self), fields(workout_id))]
  pub async fn get(&self, workout_id: &str) -> Result<Payload> {
    require("workoutID", workout_id)?;

    let path = format!("/api/workouts/{}", encode(workout_id));
    self.executor().execute(RequestDescriptor::get(ApiBase::Secondary, path)).await
  }

  /// Get a detailed workout session
  ///
  /// # Arguments
  ///
  /// * `workout_session_id` - The session identifier
  #[instrument(skip(self), fields(workout_session_id))]
  pub async fn detailed_session(&self, workout_session_id: &str) -> Result<Payload> {
    require("workoutSessionID", workout_session_id)?;

    let query = Query::params().set("workoutSessionID", workout_session_id);
    self
      .executor()
      .execute(
        RequestDescriptor::get(ApiBase::Primary, "/v1/getDetailedWorkoutSession").with_query(query),
      )
      .await
  }

  /// Get a user's history for one or more movements
  ///
  /// # Arguments
  ///
  /// * `user_id` - The user's identifier
  /// * `movement_ids` - A single movement id or several; several are sent comma-joined
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # async fn run(client: ladder_client::LadderClient) -> ladder_client::Result<()> {
  /// let squat = client.workouts().movement_data("u1", "squat").await?;
  /// let lifts = client.workouts().movement_data("u1", ["squat", "deadlift"]).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, movement_ids), fields(user_id))]
  pub async fn movement_data(
    &self,
    user_id: &str,
    movement_ids: impl Into<IdList>,
  ) -> Result<Payload> {
    let movement_ids = movement_ids.into();
    require("userID", user_id)?;
    if movement_ids.is_blank() {
      return Err(Error::MissingArgument("movementIDs is required".to_string()));
    }

    let query = Query::params().set("userID", user_id).set("movementIDs", movement_ids.joined());
    self
      .executor()
      .execute(
        RequestDescriptor::get(ApiBase::Primary, "/v1/getWorkoutMovementData").with_query(query),
      )
      .await
  }
}

impl_endpoint_base!(WorkoutEndpoints);

#[cfg(test)]
mod tests {
  use crate::endpoints::test_support::mock_client;
  use ladder_core::Error;
  use serde_json::json;

  #[tokio::test]
  async fn test_get_workout_uses_secondary_host() {
    let (client, transport) = mock_client();
    transport.push_json(200, &json!({"id": "ID", "name": "Strength 1"}));

    let workout = client.workouts().get("ID").await.unwrap();

    assert_eq!(workout.as_json().unwrap()["name"], "Strength 1");
    assert_eq!(transport.last_request().unwrap().url, "https://www.joinladder.com/api/workouts/ID");
  }

  #[tokio::test]
  async fn test_get_workout_encodes_id() {
    let (client, transport) = mock_client();

    client.workouts().get("a b/c?d#e").await.unwrap();

    assert_eq!(
      transport.last_request().unwrap().url,
      "https://www.joinladder.com/api/workouts/a%20b%2Fc%3Fd%23e"
    );
  }

  #[tokio::test]
  async fn test_detailed_session() {
    let (client, transport) = mock_client();

    client.workouts().detailed_session("s-42").await.unwrap();

    assert_eq!(
      transport.last_request().unwrap().url,
      "https://rocky-api.prod.ltdev.io/v1/getDetailedWorkoutSession?workoutSessionID=s-42"
    );
  }

  #[tokio::test]
  async fn test_movement_data_joins_ids() {
    let (client, transport) = mock_client();
    let workouts = client.workouts();

    workouts.movement_data("u1", ["a", "b", "c"]).await.unwrap();
    assert_eq!(
      transport.last_request().unwrap().url,
      "https://rocky-api.prod.ltdev.io/v1/getWorkoutMovementData?userID=u1&movementIDs=a%2Cb%2Cc"
    );

    workouts.movement_data("u1", "x").await.unwrap();
    assert_eq!(
      transport.last_request().unwrap().url,
      "https://rocky-api.prod.ltdev.io/v1/getWorkoutMovementData?userID=u1&movementIDs=x"
    );
  }

  #[tokio::test]
  async fn test_missing_arguments_never_reach_transport() {
    let (client, transport) = mock_client();
    let workouts = client.workouts();

    assert!(matches!(workouts.get("").await, Err(Error::MissingArgument(_))));
    assert!(matches!(workouts.detailed_session("").await, Err(Error::MissingArgument(_))));
    assert!(matches!(workouts.movement_data("", "x").await, Err(Error::MissingArgument(_))));
    assert!(matches!(
      workouts.movement_data("u1", Vec::<String>::new()).await,
      Err(Error::MissingArgument(_))
    ));
    assert!(matches!(workouts.movement_data("u1", "").await, Err(Error::MissingArgument(_))));

    assert_eq!(transport.call_count(), 0);
  }
}
