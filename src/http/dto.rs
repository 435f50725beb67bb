//! Request bodies and query strings, with their field rules.
//!
//! Every field is optional at the serde level so a missing field is reported
//! as a rule violation (`"name: must not be blank"`) instead of a parse error.

use serde::Deserialize;

use super::error::ApiError;
use crate::domain::{CuisineType, NewRestaurant, NewReview, NewVisitor, Sex, MAX_SCORE, MIN_SCORE};
use crate::service::SortOrder;

/// Collects `field: message` violations and reports them together.
#[derive(Debug, Default)]
struct Violations(Vec<String>);

impl Violations {
    fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.0.push(format!("{}: {}", field, message));
        }
    }

    fn finish(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Invalid(self.0.join(", ")))
        }
    }
}

fn not_blank(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn score_in_range(score: Option<i64>) -> bool {
    score.is_some_and(|s| (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&s))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<CuisineType>,
    pub avg_check: Option<f64>,
}

impl RestaurantRequest {
    pub fn validate(self) -> Result<NewRestaurant, ApiError> {
        let mut violations = Violations::default();
        violations.check(not_blank(&self.name), "name", "must not be blank");
        violations.check(self.cuisine_type.is_some(), "cuisineType", "must not be empty");
        violations.check(
            self.avg_check.is_some_and(|c| c.is_finite() && c > 0.0),
            "avgCheck",
            "must be greater than zero",
        );
        violations.finish()?;

        match (self.name, self.cuisine_type, self.avg_check) {
            (Some(name), Some(cuisine_type), Some(avg_check)) => Ok(NewRestaurant {
                name,
                description: self.description.unwrap_or_default(),
                cuisine_type,
                avg_check,
            }),
            _ => Err(ApiError::Invalid("incomplete restaurant".into())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub sex: Option<Sex>,
}

impl VisitorRequest {
    pub fn validate(self) -> Result<NewVisitor, ApiError> {
        let mut violations = Violations::default();
        violations.check(self.age.is_some(), "age", "must not be empty");
        violations.check(
            self.age.map_or(true, |a| a >= 0),
            "age",
            "must not be negative",
        );
        violations.check(
            self.age.map_or(true, |a| a <= i64::from(u32::MAX)),
            "age",
            "is too large",
        );
        violations.check(self.sex.is_some(), "sex", "must not be empty");
        violations.finish()?;

        let age = self
            .age
            .and_then(|a| u32::try_from(a).ok())
            .ok_or_else(|| ApiError::Invalid("age: must not be negative".into()))?;
        let sex = self
            .sex
            .ok_or_else(|| ApiError::Invalid("sex: must not be empty".into()))?;

        Ok(NewVisitor {
            name: self.name.unwrap_or_default(),
            age,
            sex,
        })
    }
}

/// Body of `POST /api/reviews`. The ids stay optional: a missing id is
/// rejected by the review service itself.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub restaurant_id: Option<u64>,
    pub visitor_id: Option<u64>,
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

impl ReviewRequest {
    pub fn validate(self) -> Result<NewReview, ApiError> {
        let (rating, comment) = validate_score_and_comment(self.rating, self.comment)?;
        Ok(NewReview {
            visitor_id: self.visitor_id,
            restaurant_id: self.restaurant_id,
            rating,
            comment,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdateRequest {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

impl ReviewUpdateRequest {
    pub fn validate(self) -> Result<(u8, String), ApiError> {
        validate_score_and_comment(self.rating, self.comment)
    }
}

fn validate_score_and_comment(
    rating: Option<i64>,
    comment: Option<String>,
) -> Result<(u8, String), ApiError> {
    let mut violations = Violations::default();
    violations.check(
        score_in_range(rating),
        "rating",
        "must be between 1 and 5",
    );
    violations.check(not_blank(&comment), "comment", "must not be blank");
    violations.finish()?;

    let rating = rating
        .and_then(|r| u8::try_from(r).ok())
        .ok_or_else(|| ApiError::Invalid("rating: must be between 1 and 5".into()))?;
    Ok((rating, comment.unwrap_or_default()))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantListQuery {
    pub min_rating: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReviewListQuery {
    pub sort: Option<SortOrder>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl ReviewListQuery {
    pub fn is_paged(&self) -> bool {
        self.sort.is_some() || self.page.is_some() || self.size.is_some()
    }
}
