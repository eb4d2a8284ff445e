use super::*;
use anyhow::anyhow;
use diesel::sql_types::BigInt;

macro_rules! impl_place_queries {
    () => {
        fn get_place(&self, id: &str) -> Result<DreamPlace> {
            get_place(&mut self.conn.borrow_mut(), id)
        }
        fn all_places(&self) -> Result<Vec<DreamPlace>> {
            all_places(&mut self.conn.borrow_mut())
        }
        fn count_places(&self) -> Result<usize> {
            count_places(&mut self.conn.borrow_mut())
        }
    };
}

macro_rules! impl_place_repo {
    ($($conn:ident),+) => {
        $(
            impl<'a> PlaceRepo for $conn<'a> {
                fn create_place(&self, place: &DreamPlace) -> Result<Id> {
                    create_place(&mut self.conn.borrow_mut(), place)
                }
                fn update_place(&self, place: &DreamPlace) -> Result<()> {
                    update_place(&mut self.conn.borrow_mut(), place)
                }
                fn delete_place(&self, id: &str) -> Result<()> {
                    delete_place(&mut self.conn.borrow_mut(), id)
                }
                fn delete_places_by_name(&self, name: &str) -> Result<usize> {
                    delete_places_by_name(&mut self.conn.borrow_mut(), name)
                }
                impl_place_queries!();
            }
        )+
    };
}

impl_place_repo!(DbReadWrite, DbConnection);

impl<'a> PlaceRepo for DbReadOnly<'a> {
    fn create_place(&self, _place: &DreamPlace) -> Result<Id> {
        Err(read_only())
    }
    fn update_place(&self, _place: &DreamPlace) -> Result<()> {
        Err(read_only())
    }
    fn delete_place(&self, _id: &str) -> Result<()> {
        Err(read_only())
    }
    fn delete_places_by_name(&self, _name: &str) -> Result<usize> {
        Err(read_only())
    }
    impl_place_queries!();
}

fn read_only() -> repo::Error {
    anyhow!("Write access on a read-only connection").into()
}

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

fn join_photos(photos: &[PhotoRef]) -> String {
    photos
        .iter()
        .map(PhotoRef::as_str)
        .collect::<Vec<_>>()
        .join(&PhotoRef::SEPARATOR.to_string())
}

fn split_photos(photos: &str) -> Vec<PhotoRef> {
    photos
        .split(PhotoRef::SEPARATOR)
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| {
            s.parse()
                .map_err(|err| log::warn!("Skipping invalid photo reference '{s}': {err}"))
                .ok()
        })
        .collect()
}

fn into_new_place(place: &DreamPlace) -> models::NewPlace {
    let DreamPlace {
        id: _,
        name,
        city,
        notes,
        photos,
        visited,
        rating,
        pos,
        created_at,
    } = place;
    let (latitude, longitude) = match pos.filter(|pos| pos.is_valid()) {
        Some(pos) => {
            let (lat, lng) = pos.to_lat_lng_deg();
            (Some(lat), Some(lng))
        }
        None => (None, None),
    };
    models::NewPlace {
        name,
        city,
        notes,
        latitude,
        longitude,
        photos: join_photos(photos),
        visited: i16::from(*visited),
        rating: rating.stars(),
        created_at: created_at.map(Timestamp::as_millis),
    }
}

fn load_place(place: models::Place) -> DreamPlace {
    let models::Place {
        id,
        name,
        city,
        notes,
        latitude,
        longitude,
        photos,
        visited,
        rating,
        created_at,
    } = place;
    let pos = match (latitude, longitude) {
        (Some(lat), Some(lng)) => {
            let pos = MapPoint::try_from_lat_lng_deg(lat, lng);
            if pos.is_none() {
                log::warn!("Place {id} has an invalid position: {lat},{lng}");
            }
            pos
        }
        _ => None,
    };
    let rating = StarRating::try_new(rating).unwrap_or_else(|| {
        log::warn!("Place {id} has an invalid rating: {rating}");
        StarRating::default()
    });
    DreamPlace {
        id: Id::from(id),
        name,
        city,
        notes,
        photos: split_photos(&photos),
        visited: visited != 0,
        rating,
        pos,
        created_at: created_at.map(Timestamp::from_millis),
    }
}

fn create_place(conn: &mut SqliteConnection, place: &DreamPlace) -> Result<Id> {
    diesel::insert_into(schema::places::table)
        .values(&into_new_place(place))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    log::debug!("Inserted place '{}' with row id {rowid}", place.name);
    Ok(Id::from(rowid))
}

fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<DreamPlace> {
    let rowid = parse_rowid(id)?;
    let place = schema::places::table
        .find(rowid)
        .first::<models::Place>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_place(place))
}

fn all_places(conn: &mut SqliteConnection) -> Result<Vec<DreamPlace>> {
    use schema::places::dsl;
    Ok(schema::places::table
        .order_by(dsl::id)
        .load::<models::Place>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_place)
        .collect())
}

fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::places::table
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn update_place(conn: &mut SqliteConnection, place: &DreamPlace) -> Result<()> {
    let rowid = parse_rowid(place.id.as_str())?;
    let count = diesel::update(schema::places::table.find(rowid))
        .set(&into_new_place(place))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_place(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    let rowid = parse_rowid(id)?;
    let count = diesel::delete(schema::places::table.find(rowid))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_places_by_name(conn: &mut SqliteConnection, name: &str) -> Result<usize> {
    use schema::places::dsl;
    diesel::delete(schema::places::table.filter(dsl::name.eq(name)))
        .execute(conn)
        .map_err(from_diesel_err)
}
