use diesel::sql_types::{BigInt, Text};

use super::*;

impl RestrictionRepo for DbReadWrite<'_> {
    fn has_active_restriction(
        &self,
        user_id: &Id,
        restriction_type: RestrictionType,
        now: Timestamp,
    ) -> Result<bool> {
        has_active_restriction(&mut self.conn.borrow_mut(), user_id, restriction_type, now)
    }
    fn create_restriction_if_absent(&self, restriction: &UserRestriction) -> Result<bool> {
        create_restriction_if_absent(&mut self.conn.borrow_mut(), restriction)
    }
}

impl RestrictionRepo for DbReadOnly<'_> {
    fn has_active_restriction(
        &self,
        user_id: &Id,
        restriction_type: RestrictionType,
        now: Timestamp,
    ) -> Result<bool> {
        has_active_restriction(&mut self.conn.borrow_mut(), user_id, restriction_type, now)
    }
    fn create_restriction_if_absent(&self, _restriction: &UserRestriction) -> Result<bool> {
        Err(read_only_violation())
    }
}

impl RestrictionRepo for DbConnection<'_> {
    fn has_active_restriction(
        &self,
        user_id: &Id,
        restriction_type: RestrictionType,
        now: Timestamp,
    ) -> Result<bool> {
        has_active_restriction(&mut self.conn.borrow_mut(), user_id, restriction_type, now)
    }
    fn create_restriction_if_absent(&self, restriction: &UserRestriction) -> Result<bool> {
        create_restriction_if_absent(&mut self.conn.borrow_mut(), restriction)
    }
}

fn has_active_restriction(
    conn: &mut SqliteConnection,
    user_id: &Id,
    restriction_type: RestrictionType,
    now: Timestamp,
) -> Result<bool> {
    use schema::user_restrictions::dsl;
    diesel::select(diesel::dsl::exists(
        dsl::user_restrictions
            .filter(dsl::user_id.eq(user_id.as_str()))
            .filter(dsl::restriction_type.eq(restriction_type.as_str()))
            .filter(dsl::expires_at.gt(now.as_millis())),
    ))
    .get_result::<bool>(conn)
    .map_err(from_diesel_err)
}

// The unique constraint on (user_id, restriction_type) resolves
// concurrent attempts. Only an expired restriction is overwritten.
const UPSERT_RESTRICTION_SQL: &str = r#"
INSERT INTO user_restrictions
    (id, user_id, restriction_type, reason, created_at, expires_at)
VALUES (?, ?, ?, ?, ?, ?)
ON CONFLICT (user_id, restriction_type) DO UPDATE SET
    id = excluded.id,
    reason = excluded.reason,
    created_at = excluded.created_at,
    expires_at = excluded.expires_at
WHERE user_restrictions.expires_at <= excluded.created_at
"#;

fn create_restriction_if_absent(
    conn: &mut SqliteConnection,
    restriction: &UserRestriction,
) -> Result<bool> {
    let UserRestriction {
        id,
        user_id,
        restriction_type,
        reason,
        created_at,
        expires_at,
    } = restriction;
    let count = diesel::sql_query(UPSERT_RESTRICTION_SQL)
        .bind::<Text, _>(id.as_str())
        .bind::<Text, _>(user_id.as_str())
        .bind::<Text, _>(restriction_type.as_str())
        .bind::<Text, _>(reason.as_str())
        .bind::<BigInt, _>(created_at.as_millis())
        .bind::<BigInt, _>(expires_at.as_millis())
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}
