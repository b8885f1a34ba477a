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

//! User endpoints: the signed-in user and profile calendars

use super::{impl_endpoint_base, EndpointBase};
use crate::executor::RequestExecutor;
use chrono::NaiveDate;
use ladder_core::error::require;
use ladder_core::{ApiBase, Payload, Query, RequestDescriptor, Result};
use std::sync::Arc;
use tracing::instrument;

/// Date format expected by calendar endpoints
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Endpoints describing users
pub struct UserEndpoints {
  executor: Arc<RequestExecutor>,
}

impl UserEndpoints {
  /// Get the user the bearer token belongs to
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # async fn run(client: ladder_client::LadderClient) -> ladder_client::Result<()> {
  /// let me = client.users().current().await?;
  /// println!("{:?}", me.as_json());
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn current(&self) -> Result<Payload> {
    self.executor().execute(RequestDescriptor::get(ApiBase::Primary, "/users/me")).await
  }

  /// Get a user's profile calendar between two dates, inclusive
  ///
  /// # Arguments
  ///
  /// * `user_id` - The user's identifier
  /// * `first_date` - First day, `YYYY-MM-DD`
  /// * `last_date` - Last day, `YYYY-MM-DD`
  /// * `iana_timezone_id` - Timezone the days are interpreted in, e.g. `America/New_York`
  #[instrument(skip(self), fields(user_id, first_date, last_date, iana_timezone_id))]
  pub async fn profile_calendar(
    &self,
    user_id: &str,
    first_date: &str,
    last_date: &str,
    iana_timezone_id: &str,
  ) -> Result<Payload> {
    require("userID", user_id)?;
    require("firstDateStr", first_date)?;
    require("lastDateStr", last_date)?;
    require("ianaTimezoneID", iana_timezone_id)?;

    let query = Query::params()
      .set("userID", user_id)
      .set("firstDateStr", first_date)
      .set("lastDateStr", last_date)
      .set("ianaTimezoneID", iana_timezone_id);

    self
      .executor()
      .execute(
        RequestDescriptor::get(ApiBase::Primary, "/v1/getUserProfileCalendar").with_query(query),
      )
      .await
  }

  /// Same as [`profile_calendar`](Self::profile_calendar) with typed dates
  pub async fn profile_calendar_for_dates(
    &self,
    user_id: &str,
    first_date: NaiveDate,
    last_date: NaiveDate,
    iana_timezone_id: &str,
  ) -> Result<Payload> {
    let first = first_date.format(CALENDAR_DATE_FORMAT).to_string();
    let last = last_date.format(CALENDAR_DATE_FORMAT).to_string();
    self.profile_calendar(user_id, &first, &last, iana_timezone_id).await
  }
}

impl_endpoint_base!(UserEndpoints);

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_calendar_date(date: &str) -> Result<NaiveDate> {
  Ok(NaiveDate::parse_from_str(date, CALENDAR_DATE_FORMAT)?)
}
