use super::prelude::*;

pub fn delete_place<R: PlaceRepo>(repo: &R, id: &str) -> Result<()> {
    repo.delete_place(id)?;
    log::debug!("Deleted place {id}");
    Ok(())
}

/// Delete all places with exactly this name.
pub fn delete_place_by_name<R: PlaceRepo>(repo: &R, name: &str) -> Result<usize> {
    let count = repo.delete_places_by_name(name)?;
    if count > 1 {
        log::info!("Deleted {count} places named '{name}'");
    }
    Ok(count)
}
