use anyhow::{Context, Result};
use log::info;

use users_crud::checks;
use users_crud::client::UsersApi;
use users_crud::fixtures::{new_user_data, update_user_data};
use users_crud::settings::Settings;

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let settings = Settings::new().context("Failed to load settings")?;
    let api = UsersApi::from_settings(&settings)?;
    info!("Checking users API at {}", api.url());

    let id = checks::run_lifecycle(&api, &new_user_data(), &update_user_data())
        .context("Users CRUD check failed")?;
    info!("Users CRUD check passed for user {}", id);
    Ok(())
}
