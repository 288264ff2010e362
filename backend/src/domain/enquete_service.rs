//! Enquete validation and persistence service.
//!
//! This module orchestrates the validate-before-save lifecycle over the
//! [`EnqueteRepository`] port. Rule evaluation itself is pure; the service
//! performs the one store read the uniqueness rule needs and maps adapter
//! duplicate rejections back onto the `taken` violation.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::ports::{EnqueteRepository, EnqueteRepositoryError};
use crate::domain::validation::{self, is_valid_mail};
use crate::domain::{
    EnqueteId, Field, FoodEnquete, RuleContext, StoredEnquete, Violation, ViolationKind,
    Violations,
};

/// Failures surfaced by [`EnqueteService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnqueteServiceError {
    /// The enquete broke at least one rule; nothing was stored.
    #[error("enquete failed validation: {0}")]
    Invalid(Violations),
    /// The store could not answer.
    #[error(transparent)]
    Repository(#[from] EnqueteRepositoryError),
}

impl EnqueteServiceError {
    /// Violations behind an [`EnqueteServiceError::Invalid`] rejection.
    #[must_use]
    pub const fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Invalid(violations) => Some(violations),
            Self::Repository(_) => None,
        }
    }
}

/// Enquete service validating submissions and saving the valid ones.
#[derive(Clone)]
pub struct EnqueteService<R> {
    repository: Arc<R>,
}

impl<R> EnqueteService<R> {
    /// Create a new service over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> EnqueteService<R>
where
    R: EnqueteRepository,
{
    /// Evaluate every rule against `enquete`.
    ///
    /// Reads the store once, only when the mail is well formed. The read
    /// reserves nothing; [`Self::save`] relies on the adapter to reject a
    /// duplicate that lands in between.
    ///
    /// # Errors
    ///
    /// Returns [`EnqueteServiceError::Repository`] when the mail lookup
    /// fails.
    pub async fn validate(&self, enquete: &FoodEnquete) -> Result<Violations, EnqueteServiceError> {
        let context = self.rule_context(enquete).await?;
        let violations = validation::evaluate(enquete, &context);
        debug!(
            violation_count = violations.len(),
            mail_taken = context.mail_taken(),
            "evaluated enquete rules"
        );
        Ok(violations)
    }

    /// Validate and, when valid, store `enquete`.
    ///
    /// # Errors
    ///
    /// Returns [`EnqueteServiceError::Invalid`] when any rule fails, including
    /// a duplicate mail the adapter caught at insert time. The store is left
    /// untouched in that case. Adapter failures surface as
    /// [`EnqueteServiceError::Repository`].
    pub async fn save(&self, enquete: &FoodEnquete) -> Result<StoredEnquete, EnqueteServiceError> {
        let violations = self.validate(enquete).await?;
        if !violations.is_empty() {
            warn!(%violations, "rejected enquete");
            return Err(EnqueteServiceError::Invalid(violations));
        }

        match self.repository.insert(enquete).await {
            Ok(stored) => {
                info!(id = %stored.id(), "stored enquete");
                Ok(stored)
            }
            Err(EnqueteRepositoryError::DuplicateMail { .. }) => {
                let violations: Violations = [Violation::new(Field::Mail, ViolationKind::Taken)]
                    .into_iter()
                    .collect();
                warn!(%violations, "store rejected duplicate mail");
                Err(EnqueteServiceError::Invalid(violations))
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Fetch one stored enquete.
    ///
    /// # Errors
    ///
    /// Returns [`EnqueteServiceError::Repository`] when the lookup fails.
    pub async fn find(&self, id: EnqueteId) -> Result<Option<StoredEnquete>, EnqueteServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Every stored enquete in identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`EnqueteServiceError::Repository`] when the listing fails.
    pub async fn list(&self) -> Result<Vec<StoredEnquete>, EnqueteServiceError> {
        Ok(self.repository.list_all().await?)
    }

    /// Number of stored enquetes.
    ///
    /// # Errors
    ///
    /// Returns [`EnqueteServiceError::Repository`] when the listing fails.
    pub async fn count(&self) -> Result<usize, EnqueteServiceError> {
        Ok(self.list().await?.len())
    }

    async fn rule_context(
        &self,
        enquete: &FoodEnquete,
    ) -> Result<RuleContext, EnqueteServiceError> {
        let Some(mail) = enquete.mail.as_deref().filter(|mail| is_valid_mail(mail)) else {
            return Ok(RuleContext::detached());
        };
        let taken = self.repository.exists_by_mail(mail).await?;
        Ok(RuleContext::new(taken))
    }
}

#[cfg(test)]
#[path = "enquete_service_tests.rs"]
mod tests;
