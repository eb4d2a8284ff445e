use super::*;
use dp_core::{entities::*, repositories::*, usecases as uc, RepoError};
use dp_entities::builders::*;

fn in_memory_db() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

#[test]
fn create_and_load_places() {
    let db = in_memory_db();
    let conn = db.exclusive().unwrap();
    let place = DreamPlace::build()
        .name("Sigiriya")
        .city("Dambulla")
        .notes("Lion rock")
        .lat_lng(7.957, 80.7603)
        .photos(vec!["file:///a.jpg", "file:///b.jpg"])
        .finish();
    let id = conn.create_place(&place).unwrap();
    assert_eq!(Some(1), id.to_rowid());
    let id2 = conn
        .create_place(&DreamPlace::build().name("Ella Rock").city("Ella").finish())
        .unwrap();
    assert_eq!(Some(2), id2.to_rowid());
    drop(conn);

    let conn = db.shared().unwrap();
    let loaded = conn.get_place(id.as_str()).unwrap();
    assert_eq!(id, loaded.id);
    assert_eq!("Lion rock", loaded.notes);
    assert_eq!(place.photos, loaded.photos);
    let (lat, lng) = loaded.pos.unwrap().to_lat_lng_deg();
    assert!((lat - 7.957).abs() < 1e-6);
    assert!((lng - 80.7603).abs() < 1e-6);
    assert!(!loaded.visited);

    let unplaced = conn.get_place(id2.as_str()).unwrap();
    assert_eq!(None, unplaced.pos);
    assert!(unplaced.photos.is_empty());

    assert_eq!(2, conn.count_places().unwrap());
    let names: Vec<_> = conn
        .all_places()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(vec!["Sigiriya", "Ella Rock"], names);
}

#[test]
fn unknown_and_non_numeric_ids() {
    let db = in_memory_db();
    let conn = db.exclusive().unwrap();
    assert!(matches!(conn.get_place("42"), Err(RepoError::NotFound)));
    assert!(matches!(
        conn.get_place("not-a-row-id"),
        Err(RepoError::NotFound)
    ));
    assert!(matches!(conn.delete_place("42"), Err(RepoError::NotFound)));
    let place = DreamPlace::build().id("7").name("x").city("y").finish();
    assert!(matches!(conn.update_place(&place), Err(RepoError::NotFound)));
}

#[test]
fn update_and_delete_places() {
    let db = in_memory_db();
    let conn = db.exclusive().unwrap();
    let id = conn
        .create_place(
            &DreamPlace::build()
                .name("Mirissa")
                .city("Matara")
                .lat_lng(5.9483, 80.4716)
                .finish(),
        )
        .unwrap();
    let mut place = conn.get_place(id.as_str()).unwrap();
    place.visited = true;
    place.rating = StarRating::new(4.5);
    place.pos = None;
    place.photos = vec!["file:///whale.jpg".parse().unwrap()];
    conn.update_place(&place).unwrap();
    assert_eq!(place, conn.get_place(id.as_str()).unwrap());

    for _ in 0..2 {
        conn.create_place(&DreamPlace::build().name("Galle Fort").city("Galle").finish())
            .unwrap();
    }
    assert_eq!(2, conn.delete_places_by_name("Galle Fort").unwrap());
    conn.delete_place(id.as_str()).unwrap();
    assert_eq!(0, conn.count_places().unwrap());
}

#[test]
fn read_only_connections_reject_writes() {
    let db = in_memory_db();
    let conn = db.shared().unwrap();
    let place = DreamPlace::build().name("Yala").city("Tissa").finish();
    assert!(matches!(conn.create_place(&place), Err(RepoError::Other(_))));
    assert_eq!(0, conn.count_places().unwrap());
}

#[test]
fn roll_back_failed_transactions() {
    let db = in_memory_db();
    let mut conn = db.exclusive().unwrap();
    let res = conn.transaction(|tx| {
        tx.create_place(&DreamPlace::build().name("Kandy Lake").city("Kandy").finish())?;
        Err::<(), _>(uc::Error::Name)
    });
    assert!(matches!(res, Err(uc::Error::Name)));
    assert_eq!(0, conn.count_places().unwrap());

    let id = conn
        .transaction(|tx| {
            uc::create_place(
                tx,
                uc::NewPlace {
                    name: "Kandy Lake".into(),
                    city: "Kandy".into(),
                    ..Default::default()
                },
            )
        })
        .unwrap()
        .id;
    assert_eq!(Some(1), id.to_rowid());
}
