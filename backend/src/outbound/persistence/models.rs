//! Internal Diesel row structs for the enquete table.
//!
//! Implementation details of the persistence layer; the domain only ever sees
//! [`FoodEnquete`] and [`StoredEnquete`].

use diesel::prelude::*;

use crate::domain::{EnqueteId, EnqueteIdValidationError, FoodEnquete, StoredEnquete};

use super::schema::food_enquetes;

/// Row read back from `food_enquetes`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = food_enquetes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EnqueteRow {
    pub id: i64,
    pub name: Option<String>,
    pub mail: Option<String>,
    pub age: Option<i32>,
    pub food_id: Option<i32>,
    pub score: Option<i32>,
    pub request: Option<String>,
    pub present_id: Option<i32>,
}

impl TryFrom<EnqueteRow> for StoredEnquete {
    type Error = EnqueteIdValidationError;

    fn try_from(row: EnqueteRow) -> Result<Self, Self::Error> {
        let id = EnqueteId::new(row.id)?;
        Ok(Self::new(
            id,
            FoodEnquete {
                name: row.name,
                mail: row.mail,
                age: row.age,
                food_id: row.food_id,
                score: row.score,
                request: row.request,
                present_id: row.present_id,
            },
        ))
    }
}

/// Insertable view over a submitted enquete.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = food_enquetes)]
pub(crate) struct NewEnqueteRow<'a> {
    pub name: Option<&'a str>,
    pub mail: Option<&'a str>,
    pub age: Option<i32>,
    pub food_id: Option<i32>,
    pub score: Option<i32>,
    pub request: Option<&'a str>,
    pub present_id: Option<i32>,
}

impl<'a> From<&'a FoodEnquete> for NewEnqueteRow<'a> {
    fn from(enquete: &'a FoodEnquete) -> Self {
        Self {
            name: enquete.name.as_deref(),
            mail: enquete.mail.as_deref(),
            age: enquete.age,
            food_id: enquete.food_id,
            score: enquete.score,
            request: enquete.request.as_deref(),
            present_id: enquete.present_id,
        }
    }
}
