use clap::Args;

use crate::db::Database;
use crate::profile::{self, ProfileUpdate};
use crate::render::terminal::render_profile;
use crate::request::fields::PersonalityType;

#[derive(Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub age: Option<u8>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub occupation: Option<String>,
    #[arg(long, value_enum)]
    pub personality_type: Option<PersonalityType>,
    #[arg(long)]
    pub bio: Option<String>,
    /// Repeat to add several
    #[arg(long = "add-interest")]
    pub add_interests: Vec<String>,
    /// Repeat to remove several
    #[arg(long = "remove-interest")]
    pub remove_interests: Vec<String>,
    /// Photo URL; pass an empty string to clear
    #[arg(long)]
    pub profile_photo: Option<String>,
}

impl From<UpdateArgs> for ProfileUpdate {
    fn from(a: UpdateArgs) -> Self {
        Self {
            full_name: a.full_name,
            email: a.email,
            age: a.age,
            location: a.location,
            occupation: a.occupation,
            personality_type: a.personality_type,
            bio: a.bio,
            add_interests: a.add_interests,
            remove_interests: a.remove_interests,
            profile_photo: a.profile_photo,
        }
    }
}

pub fn show(db: &Database, json: bool) -> anyhow::Result<()> {
    let me = profile::me(db)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&me)?);
    } else {
        println!("{}", render_profile(&me));
    }
    Ok(())
}

pub fn update(db: &Database, args: UpdateArgs) -> anyhow::Result<()> {
    let update = ProfileUpdate::from(args);
    if update.is_empty() {
        println!("Nothing to update. See `socialsphere profile update --help`.");
        return Ok(());
    }

    let updated = profile::update_my_user_data(db, update)?;
    println!("Profile saved.");
    println!("{}", render_profile(&updated));
    Ok(())
}
