use super::prelude::*;

fn load_own_review<R: ReviewRepo>(repo: &R, review_id: &Id, user_id: &Id) -> Result<Review> {
    let review = repo.get_review(review_id).map_err(|err| match err {
        RepoError::NotFound => Error::ReviewNotFound,
        err => err.into(),
    })?;
    if &review.user_id != user_id {
        // Don't disclose the existence of reviews of other users
        return Err(Error::ReviewNotFound);
    }
    Ok(review)
}

pub fn update_review<R: ReviewRepo>(
    repo: &R,
    review_id: &Id,
    user_id: &Id,
    content: String,
    rating: RatingValue,
    now: Timestamp,
) -> Result<Review> {
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let mut review = load_own_review(repo, review_id, user_id)?;
    review.content = content;
    review.rating = rating;
    review.updated_at = Some(now);
    repo.update_review(&review)?;
    Ok(review)
}

pub fn delete_review<R: ReviewRepo>(
    repo: &R,
    review_id: &Id,
    user_id: &Id,
    now: Timestamp,
) -> Result<()> {
    let mut review = load_own_review(repo, review_id, user_id)?;
    review.deleted_at = Some(now);
    Ok(repo.update_review(&review)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn db_with_review() -> (MockDb, Review) {
        let db = MockDb::default();
        let review = Review::build()
            .user_id("a")
            .content("ok")
            .rating(3)
            .created_at(Timestamp::from_millis(1_000))
            .finish();
        db.reviews.borrow_mut().push(review.clone());
        (db, review)
    }

    #[test]
    fn update_own_review() {
        let (db, review) = db_with_review();
        let now = Timestamp::from_millis(2_000);
        let updated =
            update_review(&db, &review.id, &"a".into(), "great".into(), 5.into(), now).unwrap();
        assert_eq!("great", updated.content);
        assert_eq!(RatingValue::max(), updated.rating);
        assert_eq!(Some(now), updated.updated_at);
        assert_eq!(review.created_at, updated.created_at);
        assert_eq!(updated, db.reviews.borrow()[0]);
    }

    #[test]
    fn reject_invalid_rating_on_update() {
        let (db, review) = db_with_review();
        let res = update_review(
            &db,
            &review.id,
            &"a".into(),
            "".into(),
            0.into(),
            Timestamp::now(),
        );
        assert!(matches!(res, Err(Error::RatingValue)));
        assert_eq!(review, db.reviews.borrow()[0]);
    }

    #[test]
    fn reviews_of_other_users_cannot_be_modified() {
        let (db, review) = db_with_review();
        let res = update_review(
            &db,
            &review.id,
            &"b".into(),
            "bad".into(),
            1.into(),
            Timestamp::now(),
        );
        assert!(matches!(res, Err(Error::ReviewNotFound)));
        let res = delete_review(&db, &review.id, &"b".into(), Timestamp::now());
        assert!(matches!(res, Err(Error::ReviewNotFound)));
        assert_eq!(review, db.reviews.borrow()[0]);
    }

    #[test]
    fn delete_review_only_once() {
        let (db, review) = db_with_review();
        let now = Timestamp::from_millis(3_000);
        delete_review(&db, &review.id, &"a".into(), now).unwrap();
        assert_eq!(Some(now), db.reviews.borrow()[0].deleted_at);
        assert!(matches!(
            delete_review(&db, &review.id, &"a".into(), now),
            Err(Error::ReviewNotFound)
        ));
        assert!(matches!(
            update_review(&db, &review.id, &"a".into(), "".into(), 2.into(), now),
            Err(Error::ReviewNotFound)
        ));
    }
}
