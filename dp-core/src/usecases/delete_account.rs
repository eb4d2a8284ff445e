use super::prelude::*;

/// Delete a user together with all of the user's places.
///
/// Photos are not touched here, they are removed by the
/// caller that knows where they are stored.
pub fn delete_account<U, P>(user_repo: &U, place_repo: &P, uid: &str) -> Result<Vec<DreamPlace>>
where
    U: UserRepo,
    P: PlaceRepo,
{
    // Fail early for unknown users
    user_repo.get_account(uid)?;
    let places = place_repo.all_places()?;
    for place in &places {
        place_repo.delete_place(place.id.as_str())?;
    }
    user_repo.delete_account(uid)?;
    log::info!("Deleted account {uid} with {} places", places.len());
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use dp_entities::builders::*;

    #[test]
    fn delete_account_with_places() {
        let users = MockDb::default();
        let places = MockDb::default();
        let profile = sign_up(
            &users,
            SignUp {
                first_name: "Kamal".into(),
                email: "kamal@example.lk".into(),
                password: "secret1".into(),
                ..Default::default()
            },
        )
        .unwrap();
        for name in ["Mirissa", "Ella"] {
            places
                .create_place(&DreamPlace::build().name(name).city(name).finish())
                .unwrap();
        }
        let deleted = delete_account(&users, &places, profile.uid.as_str()).unwrap();
        assert_eq!(2, deleted.len());
        assert_eq!(0, places.count_places().unwrap());
        assert!(users.accounts.borrow().is_empty());
        assert!(matches!(
            delete_account(&users, &places, profile.uid.as_str()),
            Err(Error::Repo(crate::RepoError::NotFound))
        ));
    }
}
