#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = review_tokens)]
pub struct NewReviewToken<'a> {
    pub id: &'a str,
    pub place_id: &'a str,
    pub value: &'a str,
    pub expires_at: i64,
    pub used_at: Option<i64>,
}

#[derive(Queryable)]
pub struct ReviewToken {
    pub rowid: i64,
    pub id: String,
    pub place_id: String,
    pub value: String,
    pub expires_at: i64,
    pub used_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub place_id: &'a str,
    pub token_id: &'a str,
    pub content: &'a str,
    pub rating: i16,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

#[derive(AsChangeset)]
#[diesel(table_name = reviews)]
#[diesel(treat_none_as_null = true)]
pub struct ChangedReview<'a> {
    pub content: &'a str,
    pub rating: i16,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

#[derive(Queryable)]
pub struct Review {
    pub rowid: i64,
    pub id: String,
    pub user_id: String,
    pub place_id: String,
    pub token_id: String,
    pub content: String,
    pub rating: i16,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub deleted_at: Option<i64>,
}
