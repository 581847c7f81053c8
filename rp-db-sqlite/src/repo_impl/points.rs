use diesel::upsert::excluded;

use super::*;

impl PointsRepo for DbReadWrite<'_> {
    fn add_points(&self, user_id: &Id, points: Points) -> Result<Points> {
        add_points(&mut self.conn.borrow_mut(), user_id, points)
    }
    fn load_points(&self, user_id: &Id) -> Result<Points> {
        load_points(&mut self.conn.borrow_mut(), user_id)
    }
}

impl PointsRepo for DbReadOnly<'_> {
    fn add_points(&self, _user_id: &Id, _points: Points) -> Result<Points> {
        Err(read_only_violation())
    }
    fn load_points(&self, user_id: &Id) -> Result<Points> {
        load_points(&mut self.conn.borrow_mut(), user_id)
    }
}

impl PointsRepo for DbConnection<'_> {
    fn add_points(&self, user_id: &Id, points: Points) -> Result<Points> {
        add_points(&mut self.conn.borrow_mut(), user_id, points)
    }
    fn load_points(&self, user_id: &Id) -> Result<Points> {
        load_points(&mut self.conn.borrow_mut(), user_id)
    }
}

fn add_points(conn: &mut SqliteConnection, user_id: &Id, points: Points) -> Result<Points> {
    use schema::user_points::dsl;
    let balance = match load_points(conn, user_id) {
        Ok(balance) => balance,
        Err(repo::Error::NotFound) => Points::ZERO,
        Err(err) => return Err(err),
    };
    if balance.checked_add(points).is_none() {
        return Err(repo::Error::OutOfRange);
    }
    let delta = i32::try_from(u32::from(points)).map_err(|_| repo::Error::OutOfRange)?;
    // The CHECK constraint of the column rejects overflows
    // caused by concurrent writers.
    diesel::insert_into(schema::user_points::table)
        .values((dsl::user_id.eq(user_id.as_str()), dsl::points.eq(delta)))
        .on_conflict(dsl::user_id)
        .do_update()
        .set(dsl::points.eq(dsl::points + excluded(dsl::points)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    load_points(conn, user_id)
}

fn load_points(conn: &mut SqliteConnection, user_id: &Id) -> Result<Points> {
    use schema::user_points::dsl;
    let points = dsl::user_points
        .select(dsl::points)
        .filter(dsl::user_id.eq(user_id.as_str()))
        .first::<i32>(conn)
        .map_err(from_diesel_err)?;
    Points::try_from(i64::from(points)).map_err(|err| repo::Error::Other(err.into()))
}
