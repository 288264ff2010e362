//! Diesel table definitions for the enquete store.
//!
//! Must match the deployed table. Every answer column is nullable because the
//! store holds what respondents submitted; the rules, not the schema, decide
//! what is required. A unique index on `mail` backs the duplicate check at
//! insert time.

diesel::table! {
    /// Submitted food enquetes.
    food_enquetes (id) {
        /// Identity column assigned on insert.
        id -> Int8,
        /// Respondent name.
        name -> Nullable<Varchar>,
        /// Respondent mail address; unique when present.
        mail -> Nullable<Varchar>,
        /// Respondent age in years.
        age -> Nullable<Int4>,
        /// Rated dish.
        food_id -> Nullable<Int4>,
        /// Satisfaction score.
        score -> Nullable<Int4>,
        /// Free-text comments.
        request -> Nullable<Text>,
        /// Requested gift.
        present_id -> Nullable<Int4>,
    }
}
