use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use super::domain::{ProfileId, Review, ReviewTarget};
use super::store::{DirectoryStore, StoreError};

static REVIEW_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_review_id() -> ProfileId {
    let seq = REVIEW_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("review-{seq:06}"))
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("rating {0} is out of range (1..=5)")]
    RatingOutOfRange(u8),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Consumer-submitted review payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub target: ReviewTarget,
    pub author_id: ProfileId,
    pub author_name: String,
    pub rating: u8,
    pub comment: String,
}

/// Review intake and aggregation over the injected store.
pub struct ReviewService<S> {
    store: Arc<S>,
}

impl<S> ReviewService<S>
where
    S: DirectoryStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn submit(&self, review: NewReview) -> Result<Review, ReviewError> {
        if !(1..=5).contains(&review.rating) {
            return Err(ReviewError::RatingOutOfRange(review.rating));
        }
        let record = Review {
            id: next_review_id(),
            target: review.target,
            author_id: review.author_id,
            author_name: review.author_name,
            rating: review.rating,
            comment: review.comment,
            created_at: Utc::now(),
        };
        let stored = self.store.insert_review(record)?;
        self.refresh_target_score(&stored.target)?;
        Ok(stored)
    }

    /// Keep the reviewed agency's `reviews_score` stat in step with its
    /// average rating. Agent profiles carry no score field.
    fn refresh_target_score(&self, target: &ReviewTarget) -> Result<(), ReviewError> {
        if let ReviewTarget::Agency(id) = target {
            if let Some(average) = self.average_rating(target)? {
                if let Some(mut agency) = self.store.agency_by_id(id)? {
                    agency.reviews_score = average;
                    self.store.update_agency(agency)?;
                }
            }
        }
        Ok(())
    }

    pub fn reviews_for(&self, target: &ReviewTarget) -> Result<Vec<Review>, ReviewError> {
        Ok(self.store.reviews_for(target)?)
    }

    /// Mean rating for a target, `None` when it has no reviews yet.
    pub fn average_rating(&self, target: &ReviewTarget) -> Result<Option<f32>, ReviewError> {
        let reviews = self.store.reviews_for(target)?;
        if reviews.is_empty() {
            return Ok(None);
        }
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Ok(Some(total as f32 / reviews.len() as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::domain::{AgencyProfile, AuState, Classification};
    use crate::directory::store::InMemoryStore;

    fn agency(id: &str) -> AgencyProfile {
        AgencyProfile {
            id: ProfileId(id.to_string()),
            status: crate::directory::domain::ProfileStatus::Approved,
            classification: Classification::Residential,
            logo: String::new(),
            name: "Harbourline Realty".to_string(),
            principal_name: "T. Nguyen".to_string(),
            principal_email: "principal@harbourline.example".to_string(),
            principal_mobile: "0400 000 000".to_string(),
            street_address: "1 Pitt St".to_string(),
            suburb: "Sydney".to_string(),
            state: AuState::Nsw,
            postcode: "2000".to_string(),
            phone: "02 9000 0000".to_string(),
            email: "office@harbourline.example".to_string(),
            password: "hunter2".to_string(),
            office_url: String::new(),
            crm: "Rex Software".to_string(),
            reviews_score: 0.0,
            sold_current_year: 0,
            for_sale: 0,
            leased_current_year: 0,
            for_lease: 0,
            created_at: Utc::now(),
        }
    }

    fn review(rating: u8) -> NewReview {
        NewReview {
            target: ReviewTarget::Agency(ProfileId("agency-000001".to_string())),
            author_id: ProfileId("consumer-000001".to_string()),
            author_name: "Sam".to_string(),
            rating,
            comment: "Great to deal with".to_string(),
        }
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        let service = ReviewService::new(Arc::new(InMemoryStore::new()));
        assert!(matches!(
            service.submit(review(0)),
            Err(ReviewError::RatingOutOfRange(0))
        ));
        assert!(matches!(
            service.submit(review(6)),
            Err(ReviewError::RatingOutOfRange(6))
        ));
    }

    #[test]
    fn averages_ratings_per_target() {
        let service = ReviewService::new(Arc::new(InMemoryStore::new()));
        service.submit(review(4)).expect("stored");
        service.submit(review(5)).expect("stored");

        let target = ReviewTarget::Agency(ProfileId("agency-000001".to_string()));
        let average = service.average_rating(&target).expect("query succeeds");
        assert_eq!(average, Some(4.5));

        let other = ReviewTarget::Agent(ProfileId("agent-000001".to_string()));
        assert_eq!(service.average_rating(&other).expect("query succeeds"), None);
    }

    #[test]
    fn submitting_updates_the_agency_score() {
        let store = Arc::new(InMemoryStore::new());
        store
            .insert_agency(agency("agency-000001"))
            .expect("agency stored");
        let service = ReviewService::new(store.clone());

        service.submit(review(4)).expect("stored");
        service.submit(review(5)).expect("stored");

        let agency = store
            .agency_by_id(&ProfileId("agency-000001".to_string()))
            .expect("query succeeds")
            .expect("agency present");
        assert_eq!(agency.reviews_score, 4.5);
    }
}
