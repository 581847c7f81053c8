use super::*;

impl ReviewTokenRepo for DbReadWrite<'_> {
    fn add_review_tokens(&self, tokens: &[ReviewToken]) -> Result<()> {
        add_review_tokens(&mut self.conn.borrow_mut(), tokens)
    }
    fn get_review_token_by_value(&self, value: &str) -> Result<ReviewToken> {
        get_review_token_by_value(&mut self.conn.borrow_mut(), value)
    }
    fn mark_review_token_used(&self, id: &Id, used_at: Timestamp) -> Result<()> {
        mark_review_token_used(&mut self.conn.borrow_mut(), id, used_at)
    }
    fn count_unused_review_tokens(&self, place_id: &Id) -> Result<usize> {
        count_unused_review_tokens(&mut self.conn.borrow_mut(), place_id)
    }
}

impl ReviewTokenRepo for DbReadOnly<'_> {
    fn add_review_tokens(&self, _tokens: &[ReviewToken]) -> Result<()> {
        Err(read_only_violation())
    }
    fn get_review_token_by_value(&self, value: &str) -> Result<ReviewToken> {
        get_review_token_by_value(&mut self.conn.borrow_mut(), value)
    }
    fn mark_review_token_used(&self, _id: &Id, _used_at: Timestamp) -> Result<()> {
        Err(read_only_violation())
    }
    fn count_unused_review_tokens(&self, place_id: &Id) -> Result<usize> {
        count_unused_review_tokens(&mut self.conn.borrow_mut(), place_id)
    }
}

impl ReviewTokenRepo for DbConnection<'_> {
    fn add_review_tokens(&self, tokens: &[ReviewToken]) -> Result<()> {
        add_review_tokens(&mut self.conn.borrow_mut(), tokens)
    }
    fn get_review_token_by_value(&self, value: &str) -> Result<ReviewToken> {
        get_review_token_by_value(&mut self.conn.borrow_mut(), value)
    }
    fn mark_review_token_used(&self, id: &Id, used_at: Timestamp) -> Result<()> {
        mark_review_token_used(&mut self.conn.borrow_mut(), id, used_at)
    }
    fn count_unused_review_tokens(&self, place_id: &Id) -> Result<usize> {
        count_unused_review_tokens(&mut self.conn.borrow_mut(), place_id)
    }
}

impl From<models::ReviewToken> for ReviewToken {
    fn from(from: models::ReviewToken) -> Self {
        let models::ReviewToken {
            rowid: _,
            id,
            place_id,
            value,
            expires_at,
            used_at,
        } = from;
        Self {
            id: id.into(),
            place_id: place_id.into(),
            value: value.into(),
            expires_at: Timestamp::from_millis(expires_at),
            used_at: used_at.map(Timestamp::from_millis),
        }
    }
}

fn add_review_tokens(conn: &mut SqliteConnection, tokens: &[ReviewToken]) -> Result<()> {
    let new_review_tokens: Vec<_> = tokens
        .iter()
        .map(|token| models::NewReviewToken {
            id: token.id.as_str(),
            place_id: token.place_id.as_str(),
            value: token.value.as_str(),
            expires_at: token.expires_at.as_millis(),
            used_at: token.used_at.map(Timestamp::as_millis),
        })
        .collect();
    let _count = diesel::insert_into(schema::review_tokens::table)
        .values(&new_review_tokens)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(tokens.len(), _count);
    Ok(())
}

fn get_review_token_by_value(conn: &mut SqliteConnection, value: &str) -> Result<ReviewToken> {
    use schema::review_tokens::dsl;
    Ok(dsl::review_tokens
        .filter(dsl::value.eq(value))
        .first::<models::ReviewToken>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn mark_review_token_used(conn: &mut SqliteConnection, id: &Id, used_at: Timestamp) -> Result<()> {
    use schema::review_tokens::dsl;
    let count = diesel::update(
        dsl::review_tokens
            .filter(dsl::id.eq(id.as_str()))
            .filter(dsl::used_at.is_null()),
    )
    .set(dsl::used_at.eq(Some(used_at.as_millis())))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count > 0 {
        debug_assert_eq!(1, count);
        return Ok(());
    }
    let exists = diesel::select(diesel::dsl::exists(
        dsl::review_tokens.filter(dsl::id.eq(id.as_str())),
    ))
    .get_result::<bool>(conn)
    .map_err(from_diesel_err)?;
    if exists {
        Err(repo::Error::AlreadyConsumed)
    } else {
        Err(repo::Error::NotFound)
    }
}

fn count_unused_review_tokens(conn: &mut SqliteConnection, place_id: &Id) -> Result<usize> {
    use schema::review_tokens::dsl;
    Ok(dsl::review_tokens
        .filter(dsl::place_id.eq(place_id.as_str()))
        .filter(dsl::used_at.is_null())
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
