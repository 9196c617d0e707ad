use std::{future::Future, pin::Pin, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for service methods providing retry logic
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts
    initial_backoff: Duration,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Override the delay before the first retry, doubled after every further attempt
    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Execute a method with automatic retry logic
    ///
    /// Errors classified as [`ErrorRetryStrategy::Retry`] are retried with exponential backoff
    /// until `max_attempts` is reached, anything else is returned immediately.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "spend snapshot for company ID 1")
    /// - `operation`: Async function performing the work, called once per attempt
    pub async fn execute_with_retry<'a, R, F>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 'a>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicU32, Ordering},
        time::Duration,
    };

    use sea_orm::{DbErr, RuntimeErr};

    use super::RetryContext;
    use crate::server::error::{portfolio::PortfolioError, Error};

    fn connection_error() -> Error {
        Error::DbErr(DbErr::Conn(RuntimeErr::Internal("refused".to_string())))
    }

    fn ctx() -> RetryContext {
        RetryContext::new().with_initial_backoff(Duration::from_millis(1))
    }

    /// Expect a transient error to be retried and the later success returned
    #[tokio::test]
    async fn retries_until_success() {
        let attempts = AtomicU32::new(0);

        let result = ctx()
            .execute_with_retry("flaky read", || {
                let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                Box::pin(async move {
                    if attempt < 2 {
                        Err(connection_error())
                    } else {
                        Ok(attempt)
                    }
                })
            })
            .await;

        assert!(matches!(result, Ok(2)));
    }

    /// Expect a transient error to be returned once attempts are exhausted
    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let attempts = AtomicU32::new(0);

        let result: Result<(), Error> = ctx()
            .execute_with_retry("broken read", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move { Err(connection_error()) })
            })
            .await;

        assert!(matches!(result, Err(Error::DbErr(DbErr::Conn(_)))));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    /// Expect permanent errors to be returned after a single attempt
    #[tokio::test]
    async fn does_not_retry_permanent_errors() {
        let attempts = AtomicU32::new(0);

        let result: Result<(), Error> = ctx()
            .execute_with_retry("missing company", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move { Err(PortfolioError::CompanyNotFound(1).into()) })
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::PortfolioError(PortfolioError::CompanyNotFound(1)))
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
