//! Request/assert steps of the users CRUD workflow.
//!
//! Each step takes the record produced by [`create_user`], so a failed
//! creation stops every dependent request before it is sent.

use log::{debug, info};
use serde_json::{json, Value};

use crate::client::{StatusCode, UsersApi};
use crate::error::CheckError;
use crate::models::{CreatedUser, Operation, UserData};

const ID_FIELD: &str = "_id";

/// What a replace reply body can be used for.
#[derive(Debug, PartialEq)]
pub enum ReplaceOutcome {
    /// The reply carried the updated entity.
    Body(Value),
    /// No usable body; the record has to be read back.
    Refetch,
}

impl ReplaceOutcome {
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) if is_blank(&value) => ReplaceOutcome::Refetch,
            Ok(value) => ReplaceOutcome::Body(value),
            Err(_) => {
                debug!("No JSON returned in response");
                ReplaceOutcome::Refetch
            }
        }
    }
}

pub fn create_user(api: &UsersApi, user: &UserData)
    -> Result<CreatedUser, CheckError>
{
    let op = Operation::Create;
    let reply = api.create(user)?;
    reply.expect_status(op, StatusCode::CREATED)?;
    let body = reply.json(op)?;
    let id = body.get(ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or(CheckError::MissingField { op, field: ID_FIELD })?;
    debug!("Created user {}", id);
    Ok(user.clone().with_id(id.to_owned()))
}

pub fn read_user(api: &UsersApi, user: &CreatedUser) -> Result<(), CheckError> {
    let op = Operation::Read;
    let reply = api.fetch(&user.id)?;
    reply.expect_status(op, StatusCode::OK)?;
    check_fields(op, &reply.json(op)?, &user.data)
}

pub fn update_user(api: &UsersApi, user: &CreatedUser, update: &UserData)
    -> Result<ReplaceOutcome, CheckError>
{
    let op = Operation::Update;
    let reply = api.replace(&user.id, update)?;
    reply.expect_status(op, StatusCode::OK)?;
    debug!("Response Content: {}", reply.text);

    let outcome = ReplaceOutcome::from_text(&reply.text);
    match &outcome {
        ReplaceOutcome::Body(body) => check_fields(op, body, update)?,
        ReplaceOutcome::Refetch => {
            let reply = api.fetch(&user.id)?;
            reply.expect_status(op, StatusCode::OK)?;
            check_fields(op, &reply.json(op)?, update)?;
        }
    }
    Ok(outcome)
}

pub fn delete_user(api: &UsersApi, user: &CreatedUser) -> Result<(), CheckError> {
    let op = Operation::Delete;
    api.delete(&user.id)?.expect_status(op, StatusCode::OK)?;
    api.fetch(&user.id)?.expect_status(op, StatusCode::NOT_FOUND)
}

/// Drives one record through create, read, update and delete.
pub fn run_lifecycle(api: &UsersApi, user: &UserData, update: &UserData)
    -> Result<String, CheckError>
{
    let created = create_user(api, user)?;
    info!("Created user {}", created.id);
    read_user(api, &created)?;
    info!("Read back user {}", created.id);
    let outcome = update_user(api, &created, update)?;
    info!("Updated user {} ({:?})", created.id, outcome);
    delete_user(api, &created)?;
    info!("Deleted user {}", created.id);
    Ok(created.id)
}

// null, false, 0, "", [] and {} carry no entity.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

// Numbers compare by value, so `29` and `29.0` are the same age.
fn same_value(actual: &Value, expected: &Value) -> bool {
    match (actual.as_f64(), expected.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => actual == expected,
    }
}

fn check_fields(op: Operation, body: &Value, expected: &UserData)
    -> Result<(), CheckError>
{
    let fields = [
        ("name", json!(expected.name)),
        ("email", json!(expected.email)),
        ("age", json!(expected.age)),
    ];
    for (field, expected) in fields {
        let actual = body.get(field)
            .ok_or(CheckError::MissingField { op, field })?;
        if !same_value(actual, &expected) {
            return Err(CheckError::FieldMismatch {
                op,
                field,
                expected,
                actual: actual.clone(),
            });
        }
    }
    Ok(())
}
