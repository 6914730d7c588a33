//! Per-user lookups over the mock dataset.
//!
//! Every lookup loads the whole document from the configured [`DataSource`]
//! and scans one collection for the first record whose id field equals the
//! requested user id. A user with no record is `Ok(None)`, not an error.

use crate::errors::DataError;
use crate::models::{UserActivity, UserAverageSessions, UserId, UserMainData, UserPerformance};
use crate::storage::DataSource;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// The four collections of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    MainData,
    Activity,
    AverageSessions,
    Performance,
}

impl Category {
    pub fn collection(self) -> &'static str {
        match self {
            Category::MainData => "userMainData",
            Category::Activity => "userActivity",
            Category::AverageSessions => "userAverageSessions",
            Category::Performance => "userPerformance",
        }
    }

    /// Main data is keyed by `id`, the other collections by `userId`.
    pub fn id_field(self) -> &'static str {
        match self {
            Category::MainData => "id",
            _ => "userId",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::MainData => "main data",
            Category::Activity => "activity",
            Category::AverageSessions => "average sessions",
            Category::Performance => "performance",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub struct DataAccess {
    source: Arc<dyn DataSource>,
    strict: bool,
}

impl DataAccess {
    /// In strict mode a malformed record is an error; otherwise it is logged
    /// and reported as missing.
    pub fn new(source: Arc<dyn DataSource>, strict: bool) -> Self {
        Self { source, strict }
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    pub async fn fetch_user_main_data(&self, user_id: UserId) -> Result<Option<UserMainData>, DataError> {
        self.fetch_record(Category::MainData, user_id).await
    }

    pub async fn fetch_user_activity(&self, user_id: UserId) -> Result<Option<UserActivity>, DataError> {
        self.fetch_record(Category::Activity, user_id).await
    }

    pub async fn fetch_user_average_sessions(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserAverageSessions>, DataError> {
        self.fetch_record(Category::AverageSessions, user_id).await
    }

    pub async fn fetch_user_performance(&self, user_id: UserId) -> Result<Option<UserPerformance>, DataError> {
        self.fetch_record(Category::Performance, user_id).await
    }

    async fn fetch_record<T: DeserializeOwned>(
        &self,
        category: Category,
        user_id: UserId,
    ) -> Result<Option<T>, DataError> {
        let document = self.source.load().await?;

        let Some(records) = document.get(category.collection()).and_then(Value::as_array) else {
            return self.degrade(DataError::Malformed {
                category,
                user_id,
                reason: format!("missing `{}` collection", category.collection()),
            });
        };

        let Some(raw) = records
            .iter()
            .find(|record| matches_user(record, category.id_field(), user_id))
        else {
            debug!(%category, user_id, "no record for user");
            return Ok(None);
        };

        match T::deserialize(raw) {
            Ok(record) => {
                debug!(%category, user_id, "fetched record");
                Ok(Some(record))
            }
            Err(err) => self.degrade(DataError::Malformed {
                category,
                user_id,
                reason: err.to_string(),
            }),
        }
    }

    fn degrade<T>(&self, err: DataError) -> Result<Option<T>, DataError> {
        if self.strict {
            return Err(err);
        }
        warn!(error = %err, "treating malformed record as missing");
        Ok(None)
    }
}

/// Numeric equality only: an id stored as a string never matches.
fn matches_user(record: &Value, id_field: &str, user_id: UserId) -> bool {
    record.get(id_field).and_then(Value::as_f64) == Some(f64::from(user_id))
}
