#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// `created_at` is stored as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = places)]
#[diesel(treat_none_as_null = true)]
pub struct NewPlace<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub notes: &'a str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photos: String,
    pub visited: i16,
    pub rating: f32,
    pub created_at: Option<i64>,
}

#[derive(Queryable)]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub notes: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photos: String,
    pub visited: i16,
    pub rating: f32,
    pub created_at: Option<i64>,
}
