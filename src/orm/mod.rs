pub mod model;
use model::{member, secret_santa, setting, wish};
use sea_orm::entity::prelude::*;
use sea_orm::entity::*;
use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{DbErr, Schema};
use tracing::{debug, info};

pub const WISH_DEADLINE_KEY: &str = "wish_deadline";

pub fn build_database_conn_string(
    proto: &str,
    name: &str,
    user: &str,
    password: &str,
    host: &str,
    port: &str,
    params: &str,
) -> String {
    let mut conn_string = format!("{}://", proto);
    if !user.is_empty() {
        conn_string.push_str(user);
        if !password.is_empty() {
            conn_string.push(':');
            conn_string.push_str(password);
        }
        conn_string.push('@');
    }
    if !host.is_empty() {
        conn_string.push_str(host);
        if !port.is_empty() {
            conn_string.push(':');
            conn_string.push_str(port);
        }
    }
    if proto != "sqlite" {
        // sqlite does not connect to a host.
        conn_string.push('/');
    }
    conn_string.push_str(name);
    if !params.is_empty() {
        conn_string.push('?');
        conn_string.push_str(params);
    }
    conn_string
}

async fn create_table(
    db: &DbConn,
    table_name: &str,
    mut statement: TableCreateStatement,
) -> Result<(), DbErr> {
    statement.if_not_exists();
    db.execute(db.get_database_backend().build(&statement))
        .await?;
    debug!(target: "db", "Table {} is ready", table_name);
    Ok(())
}

pub async fn create_tables(db: &DbConn) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, "FamilyMember", schema.create_table_from_entity(member::Entity)).await?;
    // Wish references FamilyMember, so it comes second
    create_table(db, "Wish", schema.create_table_from_entity(wish::Entity)).await?;
    create_table(db, "SecretSanta", schema.create_table_from_entity(secret_santa::Entity)).await?;
    create_table(db, "Setting", schema.create_table_from_entity(setting::Entity)).await?;
    Ok(())
}

pub async fn add_default_settings(db: &DbConn) -> Result<(), DbErr> {
    let defaults = [(WISH_DEADLINE_KEY, "")];

    for (key, value) in defaults {
        if setting::Entity::find()
            .filter(setting::Column::Key.eq(key))
            .one(db)
            .await?
            .is_none()
        {
            let entry = setting::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                ..Default::default()
            };
            entry.insert(db).await?;
            info!(target: "db", "Added default setting {}", key);
        }
    }
    Ok(())
}

pub async fn check_settings_table_exists(db: &DbConn) -> Result<bool, DbErr> {
    match setting::Entity::find().one(db).await {
        Ok(_) => Ok(true),
        Err(DbErr::Exec(_)) | Err(DbErr::Query(_)) => Ok(false),
        Err(err) => Err(err),
    }
}
