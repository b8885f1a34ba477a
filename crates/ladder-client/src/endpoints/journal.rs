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

//! Workout journal endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::executor::RequestExecutor;
use ladder_core::error::require;
use ladder_core::{ApiBase, Payload, Query, RequestDescriptor, Result};
use std::sync::Arc;
use tracing::instrument;

/// Workout journal endpoints: summaries and recommendations
pub struct JournalEndpoints {
  executor: Arc<RequestExecutor>,
}

impl JournalEndpoints {
  /// Get the journal summary for a user
  ///
  /// # Arguments
  ///
  /// * `user_id` - The user's identifier
  #[instrument(skip(self), fields(user_id))]
  pub async fn summary(&self, user_id: &str) -> Result<Payload> {
    require("userID", user_id)?;

    let query = Query::params().set("userID", user_id);
    self
      .executor()
      .execute(
        RequestDescriptor::get(ApiBase::Primary, "/v1/getWorkoutJournalSummary").with_query(query),
      )
      .await
  }

  /// List journal recommendations for one of the user's workouts
  ///
  /// # Arguments
  ///
  /// * `user_id` - The user's identifier
  /// * `workout_id` - The workout the recommendations are for
  #[instrument(skip(self), fields(user_id, workout_id))]
  pub async fn recommendations_v2(&self, user_id: &str, workout_id: &str) -> Result<Payload> {
    require("userID", user_id)?;
    require("workoutID", workout_id)?;

    let query = Query::params().set("userID", user_id).set("workoutID", workout_id);
    self
      .executor()
      .execute(
        RequestDescriptor::get(ApiBase::Primary, "/v1/listWorkoutJournalRecommendationsV2")
          .with_query(query),
      )
      .await
  }
}

impl_endpoint_base!(JournalEndpoints);
