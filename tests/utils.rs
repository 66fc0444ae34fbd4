#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use users_crud::checks;
use users_crud::client::UsersApi;
use users_crud::models::{CreatedUser, UserData};
use users_crud::settings::Settings;

pub const USER_ID: &str = "6710b7c2e4b0a1f3c9d2e8a1";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn users_path() -> &'static str {
    "/users"
}

pub fn user_path(id: &str) -> String {
    format!("{}/{}", users_path(), id)
}

pub fn mock_api(server: &ServerGuard) -> UsersApi {
    let settings = Settings::with_base_url(&(server.url() + users_path()));
    UsersApi::from_settings(&settings).unwrap()
}

pub fn stored(user: &UserData, id: &str) -> Value {
    json!({
        "_id": id,
        "name": user.name,
        "email": user.email,
        "age": user.age,
    })
}

fn json_mock(server: &mut ServerGuard, method: &str, path: &str,
    status: usize, body: &Value) -> Mock
{
    server.mock(method, path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
}

/// POST /users accepting `user` and answering with the stored entity.
pub fn mock_create(server: &mut ServerGuard, user: &UserData, id: &str) -> Mock {
    json_mock(server, "POST", users_path(), 201, &stored(user, id))
        .match_body(Matcher::Json(serde_json::to_value(user).unwrap()))
        .create()
}

pub fn mock_fetch(server: &mut ServerGuard, user: &UserData, id: &str) -> Mock {
    json_mock(server, "GET", &user_path(id), 200, &stored(user, id)).create()
}

pub fn mock_missing(server: &mut ServerGuard, id: &str) -> Mock {
    server.mock("GET", user_path(id).as_str())
        .with_status(404)
        .create()
}

pub fn mock_replace(server: &mut ServerGuard, update: &UserData, id: &str,
    body: &str) -> Mock
{
    server.mock("PUT", user_path(id).as_str())
        .match_body(Matcher::Json(serde_json::to_value(update).unwrap()))
        .with_status(200)
        .with_body(body)
        .create()
}

pub fn mock_delete(server: &mut ServerGuard, id: &str) -> Mock {
    server.mock("DELETE", user_path(id).as_str())
        .with_status(200)
        .create()
}

/// Creation fixture: every dependent test starts from a fresh record.
pub fn create_user(api: &UsersApi, user: &UserData) -> CreatedUser {
    match checks::create_user(api, user) {
        Ok(created) => created,
        Err(err) => panic!("User creation failed: {}", err),
    }
}
