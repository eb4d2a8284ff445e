use crate::config::{self, Config};
use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use dp_application::prelude::Backend;
use dp_core::{
    distance::{DistanceLabel, PlaceWithDistance},
    entities::*,
    gateways::geocode::GeoCodingGateway,
    usecases::{self, NewPlace, ProfileUpdate, SignUp, UpdatePlace},
};
use dp_db_sqlite::Connections;
use dp_gateways::geocoding::OpenCageGeocoder;
use std::path::PathBuf;
use time::OffsetDateTime;

#[derive(Parser)]
#[command(name = "dreamplaces", version, about = "A wishlist of travel destinations")]
pub struct Cli {
    /// Configuration file (default: dreamplaces.toml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// URL to the local database
    #[arg(long, value_name = "DATABASE_URL", global = true)]
    pub db_url: Option<String>,
    /// Current position for distances, e.g. "6.9271,79.8612"
    #[arg(long, value_name = "LAT,LNG", global = true, allow_hyphen_values = true)]
    pub at: Option<MapPoint>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new dream place
    Add {
        name: String,
        city: String,
        #[arg(long, default_value = "")]
        notes: String,
        /// Position as "lat,lng"
        #[arg(long, allow_hyphen_values = true)]
        pos: Option<MapPoint>,
        /// Look up the position by name and city
        #[arg(long, conflicts_with = "pos")]
        locate: bool,
        /// Photo file, can be repeated
        #[arg(long = "photo", value_name = "FILE")]
        photos: Vec<PathBuf>,
    },
    /// List all places, nearest first
    List,
    /// Search places by name or city
    Search { query: String },
    /// Show a single place
    Show { id: String },
    /// Change a place
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Mark as visited or not visited
        #[arg(long)]
        visited: Option<bool>,
        /// Rating in stars (0-5), only for visited places
        #[arg(long)]
        rating: Option<f32>,
        #[arg(long, allow_hyphen_values = true)]
        pos: Option<MapPoint>,
        /// Additional photo file, can be repeated
        #[arg(long = "photo", value_name = "FILE")]
        photos: Vec<PathBuf>,
    },
    /// Delete a place by its id or, in guest mode, by its name
    Delete { id: String },
    /// Delete a single photo of a place
    DeletePhoto { id: String, photo: String },
    /// Print a text for sharing a place
    Share { id: String },
    /// Places within a bounding box "south,west,north,east"
    Markers {
        #[arg(long, allow_hyphen_values = true)]
        bbox: Option<MapBbox>,
    },
    /// Find the position of a place
    Geocode { query: String },
    /// Create an account and log in
    Signup {
        first_name: String,
        email: String,
        password: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },
    Login { email: String, password: String },
    /// Continue as guest
    Logout,
    Whoami,
    /// Change the profile of the logged-in user
    Profile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
    },
    /// Delete the logged-in user with all places
    DeleteAccount {
        #[arg(long)]
        yes: bool,
    },
}

fn print_places(places: &[PlaceWithDistance]) {
    if places.is_empty() {
        println!("No places found");
    }
    for PlaceWithDistance { place, distance } in places {
        let line = format!("{}  {} ({})", place.id, place.name, place.city);
        match distance.map(DistanceLabel::from) {
            Some(label) => println!("{line}  {label}"),
            None => println!("{line}"),
        }
    }
}

fn print_place(place: &DreamPlace, current: Option<MapPoint>) {
    let with_distance = PlaceWithDistance::new(place.clone(), current);
    println!("id:       {}", place.id);
    println!("name:     {}", place.name);
    println!("city:     {}", place.city);
    if !place.notes.is_empty() {
        println!("notes:    {}", place.notes);
    }
    if let Some(pos) = place.pos {
        println!("position: {pos}");
    }
    if let Some(label) = with_distance.label() {
        println!("distance: {label}");
    }
    if place.visited {
        println!("visited:  yes, {}", place.rating);
    } else {
        println!("visited:  no");
    }
    for photo in &place.photos {
        println!("photo:    {photo}");
    }
    if let Some(created_at) = place.created_at {
        println!("created:  {created_at}");
    }
}

fn geocoder(cfg: &config::Geocoding) -> Option<Box<dyn GeoCodingGateway>> {
    match &cfg.gateway {
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            Some(Box::new(OpenCageGeocoder::new(api_key.clone())))
        }
        None => None,
    }
}

fn current_hour() -> u8 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .hour()
}

pub fn run(args: Cli, cfg: Config) -> Result<()> {
    let Cli {
        config: _,
        db_url,
        at,
        command,
    } = args;
    let db_url = db_url.unwrap_or(cfg.db.conn_sqlite);
    log::info!("Connecting to SQLite database {db_url}");
    let connections = Connections::init(&db_url, cfg.db.conn_pool_size.into())?;
    dp_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    let backend = Backend::init(connections, &cfg.storage.data_dir)?;
    let current = at.or(cfg.location.current);
    let geocoder = geocoder(&cfg.geocoding);

    match command {
        Command::Add {
            name,
            city,
            notes,
            pos,
            locate,
            photos,
        } => {
            let pos = if locate {
                let geocoder = geocoder
                    .as_ref()
                    .ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
                let query = format!("{name}, {city}");
                let found = geocoder.resolve_place(&query);
                if found.is_none() {
                    log::warn!("Could not find a position for '{query}'");
                }
                found.map(|found| found.pos)
            } else {
                pos
            };
            let new_place = NewPlace {
                name,
                city,
                notes,
                pos,
                photos: vec![],
            };
            let place = backend.add_place(new_place, &photos)?;
            print_places(&[PlaceWithDistance::new(place, current)]);
        }
        Command::List => {
            print_places(&backend.list_places(current)?);
        }
        Command::Search { query } => {
            print_places(&backend.search_places(current, &query)?);
        }
        Command::Show { id } => {
            print_place(&backend.get_place(&id)?, current);
        }
        Command::Update {
            id,
            name,
            city,
            notes,
            visited,
            rating,
            pos,
            photos,
        } => {
            let place = backend.get_place(&id)?;
            let update = UpdatePlace::from_place(&place);
            let update = UpdatePlace {
                name: name.unwrap_or(update.name),
                city: city.unwrap_or(update.city),
                notes: notes.unwrap_or(update.notes),
                visited: visited.unwrap_or(update.visited),
                rating: rating.unwrap_or(update.rating),
                pos,
                ..update
            };
            let place = backend.update_place(update, &photos)?;
            print_place(&place, current);
        }
        Command::Delete { id } => {
            let count = backend.delete_place(&id)?;
            println!("Deleted {count} place(s)");
        }
        Command::DeletePhoto { id, photo } => {
            let photo = usecases::parse_photo(&photo)?;
            let deletion = backend.delete_photo(&id, &photo)?;
            if !deletion.removed {
                bail!("Photo {photo} not found");
            }
            if deletion.all_photos_deleted() {
                println!("All photos deleted");
            } else {
                println!("Photo deleted, {} remaining", deletion.remaining());
            }
        }
        Command::Share { id } => {
            println!("{}", usecases::share_text(&backend.get_place(&id)?));
        }
        Command::Markers { bbox } => {
            for place in backend.map_markers(bbox.as_ref())? {
                if let Some(pos) = place.pos {
                    println!("{pos}  {} ({})", place.name, place.city);
                }
            }
        }
        Command::Geocode { query } => {
            let geocoder = geocoder.ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
            let found = geocoder
                .resolve_place(&query)
                .ok_or_else(|| anyhow!("Nothing found for '{query}'"))?;
            println!("{}", found.pos);
            if let Some(address) = found
                .address
                .or_else(|| geocoder.describe_position(found.pos))
            {
                println!("{address}");
            }
        }
        Command::Signup {
            first_name,
            email,
            password,
            last_name,
        } => {
            let profile = backend.sign_up(SignUp {
                first_name,
                last_name,
                email,
                password,
            })?;
            println!("Signed up as {} <{}>", profile.full_name(), profile.email);
        }
        Command::Login { email, password } => {
            backend.log_in(&email, &password)?;
            println!("{}", backend.greeting(current_hour())?);
        }
        Command::Logout => {
            backend.log_out()?;
            println!("Continuing as guest");
        }
        Command::Whoami => {
            println!("{}", backend.greeting(current_hour())?);
            if let Some(profile) = backend.current_profile()? {
                println!("{} <{}>", profile.full_name(), profile.email);
            }
        }
        Command::Profile {
            first_name,
            last_name,
            email,
            password,
            avatar_url,
        } => {
            let profile = backend
                .current_profile()?
                .ok_or_else(|| anyhow!("Not logged in"))?;
            let update = ProfileUpdate::from_profile(&profile);
            let update = ProfileUpdate {
                first_name: first_name.unwrap_or(update.first_name),
                last_name: last_name.unwrap_or(update.last_name),
                email: email.unwrap_or(update.email),
                new_password: password,
                avatar_url: avatar_url.or(update.avatar_url),
            };
            let profile = backend.update_profile(update)?;
            println!("Updated profile of {}", profile.full_name());
        }
        Command::DeleteAccount { yes } => {
            if !yes {
                bail!("Deleting an account cannot be undone, confirm with --yes");
            }
            let count = backend.delete_account()?;
            println!("Deleted account with {count} place(s)");
        }
    }
    Ok(())
}
