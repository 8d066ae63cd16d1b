use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::models::MealPlanResult;
use crate::request::MealPlanRequest;

/// Anything that can turn a built request into meal plan text.
pub trait MealPlanService {
    fn fetch(&self, request: &MealPlanRequest) -> impl Future<Output = Result<MealPlanResult>> + Send;
}

/// reqwest-backed client for the hosted service.
#[derive(Debug, Clone)]
pub struct HttpMealPlanClient {
    http: reqwest::Client,
}

impl HttpMealPlanClient {
    /// Build a client. `None` means no timeout, like a plain browser fetch.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl MealPlanService for HttpMealPlanClient {
    /// GET the request URL and return the body as text.
    ///
    /// The status code is logged but never checked: error pages are returned
    /// as the plan just like a normal body.
    async fn fetch(&self, request: &MealPlanRequest) -> Result<MealPlanResult> {
        let response = self.http.get(request.url.clone()).send().await?;
        let status = response.status();
        debug!(%status, "meal plan service responded");

        let text = response.text().await?;
        Ok(MealPlanResult::new(text))
    }
}
