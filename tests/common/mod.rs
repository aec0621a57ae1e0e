//! Shared helpers for integration tests backed by a throwaway SQLite file.

#![allow(dead_code)]

use chrono::{Duration, NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_explore::db::{DbPool, establish_connection_pool};
use pushkind_explore::models::account::NewAccount;
use pushkind_explore::models::repo::NewRepo;
use pushkind_explore::schema::{accounts, repositories};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Migrated database removed together with its temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Inserts an account and returns its id.
    pub fn account(&self, name: &str, account_type: i32, age: Duration) -> i32 {
        let mut conn = self.pool.get().expect("get connection");
        let at = timestamp(age);
        let email = format!("{name}@example.com");
        diesel::insert_into(accounts::table)
            .values(NewAccount {
                name,
                full_name: None,
                email: Some(&email),
                account_type,
                is_active: true,
                created_at: at,
                updated_at: at,
            })
            .returning(accounts::id)
            .get_result(&mut conn)
            .expect("insert account")
    }

    /// Inserts a repository and returns its id.
    pub fn repo(&self, owner_id: i32, name: &str, is_private: bool, age: Duration) -> i32 {
        let mut conn = self.pool.get().expect("get connection");
        let at = timestamp(age);
        diesel::insert_into(repositories::table)
            .values(NewRepo {
                owner_id,
                name,
                description: None,
                is_private,
                created_at: at,
                updated_at: at,
            })
            .returning(repositories::id)
            .get_result(&mut conn)
            .expect("insert repository")
    }
}

/// Point in time `age` before now.
fn timestamp(age: Duration) -> NaiveDateTime {
    (Utc::now() - age).naive_utc()
}
