use super::*;

impl ReviewRepo for DbReadWrite<'_> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn get_review(&self, id: &Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn load_reviews_of_place(&self, place_id: &Id, filter: &ReviewFilter) -> Result<Vec<Review>> {
        load_reviews_of_place(&mut self.conn.borrow_mut(), place_id, filter)
    }
    fn has_review_of_place_created_between(
        &self,
        user_id: &Id,
        place_id: &Id,
        since: Timestamp,
        until: Timestamp,
    ) -> Result<bool> {
        has_review_of_place_created_between(
            &mut self.conn.borrow_mut(),
            user_id,
            place_id,
            since,
            until,
        )
    }
    fn count_reviews_with_rating_since(
        &self,
        user_id: &Id,
        rating: RatingValue,
        since: Timestamp,
    ) -> Result<usize> {
        count_reviews_with_rating_since(&mut self.conn.borrow_mut(), user_id, rating, since)
    }
}

impl ReviewRepo for DbReadOnly<'_> {
    fn create_review(&self, _review: &Review) -> Result<()> {
        Err(read_only_violation())
    }
    fn get_review(&self, id: &Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn update_review(&self, _review: &Review) -> Result<()> {
        Err(read_only_violation())
    }
    fn load_reviews_of_place(&self, place_id: &Id, filter: &ReviewFilter) -> Result<Vec<Review>> {
        load_reviews_of_place(&mut self.conn.borrow_mut(), place_id, filter)
    }
    fn has_review_of_place_created_between(
        &self,
        user_id: &Id,
        place_id: &Id,
        since: Timestamp,
        until: Timestamp,
    ) -> Result<bool> {
        has_review_of_place_created_between(
            &mut self.conn.borrow_mut(),
            user_id,
            place_id,
            since,
            until,
        )
    }
    fn count_reviews_with_rating_since(
        &self,
        user_id: &Id,
        rating: RatingValue,
        since: Timestamp,
    ) -> Result<usize> {
        count_reviews_with_rating_since(&mut self.conn.borrow_mut(), user_id, rating, since)
    }
}

impl ReviewRepo for DbConnection<'_> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn get_review(&self, id: &Id) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn load_reviews_of_place(&self, place_id: &Id, filter: &ReviewFilter) -> Result<Vec<Review>> {
        load_reviews_of_place(&mut self.conn.borrow_mut(), place_id, filter)
    }
    fn has_review_of_place_created_between(
        &self,
        user_id: &Id,
        place_id: &Id,
        since: Timestamp,
        until: Timestamp,
    ) -> Result<bool> {
        has_review_of_place_created_between(
            &mut self.conn.borrow_mut(),
            user_id,
            place_id,
            since,
            until,
        )
    }
    fn count_reviews_with_rating_since(
        &self,
        user_id: &Id,
        rating: RatingValue,
        since: Timestamp,
    ) -> Result<usize> {
        count_reviews_with_rating_since(&mut self.conn.borrow_mut(), user_id, rating, since)
    }
}

impl From<models::Review> for Review {
    fn from(from: models::Review) -> Self {
        let models::Review {
            rowid: _,
            id,
            user_id,
            place_id,
            token_id,
            content,
            rating,
            created_at,
            updated_at,
            deleted_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            place_id: place_id.into(),
            token_id: token_id.into(),
            content,
            rating: rating.into(),
            created_at: Timestamp::from_millis(created_at),
            updated_at: updated_at.map(Timestamp::from_millis),
            deleted_at: deleted_at.map(Timestamp::from_millis),
        }
    }
}

fn create_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    let new_review = models::NewReview {
        id: review.id.as_str(),
        user_id: review.user_id.as_str(),
        place_id: review.place_id.as_str(),
        token_id: review.token_id.as_str(),
        content: &review.content,
        rating: review.rating.into(),
        created_at: review.created_at.as_millis(),
        updated_at: review.updated_at.map(Timestamp::as_millis),
        deleted_at: review.deleted_at.map(Timestamp::as_millis),
    };
    let _count = diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_review(conn: &mut SqliteConnection, id: &Id) -> Result<Review> {
    use schema::reviews::dsl;
    Ok(dsl::reviews
        .filter(dsl::id.eq(id.as_str()))
        .filter(dsl::deleted_at.is_null())
        .first::<models::Review>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn update_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    use schema::reviews::dsl;
    let changed_review = models::ChangedReview {
        content: &review.content,
        rating: review.rating.into(),
        updated_at: review.updated_at.map(Timestamp::as_millis),
        deleted_at: review.deleted_at.map(Timestamp::as_millis),
    };
    let count = diesel::update(
        dsl::reviews
            .filter(dsl::id.eq(review.id.as_str()))
            .filter(dsl::deleted_at.is_null()),
    )
    .set(&changed_review)
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn load_reviews_of_place(
    conn: &mut SqliteConnection,
    place_id: &Id,
    filter: &ReviewFilter,
) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    let ReviewFilter {
        rating,
        created_since,
        created_until,
        limit,
    } = filter;
    let mut query = dsl::reviews
        .filter(dsl::place_id.eq(place_id.as_str()))
        .filter(dsl::deleted_at.is_null())
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .into_boxed();
    if let Some(rating) = rating {
        query = query.filter(dsl::rating.eq(RatingPrimitive::from(*rating)));
    }
    if let Some(since) = created_since {
        query = query.filter(dsl::created_at.ge(since.as_millis()));
    }
    if let Some(until) = created_until {
        query = query.filter(dsl::created_at.lt(until.as_millis()));
    }
    if let Some(limit) = limit {
        query = query.limit(i64::try_from(*limit).unwrap_or(i64::MAX));
    }
    Ok(query
        .load::<models::Review>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn has_review_of_place_created_between(
    conn: &mut SqliteConnection,
    user_id: &Id,
    place_id: &Id,
    since: Timestamp,
    until: Timestamp,
) -> Result<bool> {
    use schema::reviews::dsl;
    // Deleted reviews are included on purpose
    diesel::select(diesel::dsl::exists(
        dsl::reviews
            .filter(dsl::user_id.eq(user_id.as_str()))
            .filter(dsl::place_id.eq(place_id.as_str()))
            .filter(dsl::created_at.ge(since.as_millis()))
            .filter(dsl::created_at.lt(until.as_millis())),
    ))
    .get_result::<bool>(conn)
    .map_err(from_diesel_err)
}

fn count_reviews_with_rating_since(
    conn: &mut SqliteConnection,
    user_id: &Id,
    rating: RatingValue,
    since: Timestamp,
) -> Result<usize> {
    use schema::reviews::dsl;
    Ok(dsl::reviews
        .filter(dsl::user_id.eq(user_id.as_str()))
        .filter(dsl::rating.eq(RatingPrimitive::from(rating)))
        .filter(dsl::created_at.gt(since.as_millis()))
        .filter(dsl::deleted_at.is_null())
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
