//! Member repository contracts and implementations.
//!
//! # Responsibility
//! - Provide the "fetch all member records" capability plus basic CRUD over
//!   the `members` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Member::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `fetch_all_members` ordering is deterministic so that re-running the
//!   chart pipeline on an unchanged store yields identical output.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::member::{Member, MemberId, MemberValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEMBER_SELECT_SQL: &str = "SELECT
    id,
    full_name,
    father_id,
    generation,
    dob_lunar,
    dod_lunar,
    avatar_url,
    note,
    biography,
    achievements
FROM members";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for member persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(MemberValidationError),
    Db(DbError),
    NotFound(MemberId),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "member not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "member repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "member repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "member repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted member data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MemberValidationError> for RepoError {
    fn from(value: MemberValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for member records.
///
/// The chart pipeline only requires `fetch_all_members`; the write APIs exist
/// for data-entry tooling and tests.
pub trait MemberRepository {
    /// Returns the full member set as one read-only snapshot.
    fn fetch_all_members(&self) -> RepoResult<Vec<Member>>;
    /// Loads one member by id.
    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>>;
    /// Inserts one member record.
    fn create_member(&self, member: &Member) -> RepoResult<MemberId>;
    /// Replaces one member record by id.
    fn update_member(&self, member: &Member) -> RepoResult<()>;
}

/// SQLite-backed member repository.
#[derive(Debug)]
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_member_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn fetch_all_members(&self) -> RepoResult<Vec<Member>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MEMBER_SELECT_SQL}
             ORDER BY generation IS NULL ASC, generation ASC, id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut members = Vec::new();
        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }
        Ok(members)
    }

    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_row(row)?));
        }
        Ok(None)
    }

    fn create_member(&self, member: &Member) -> RepoResult<MemberId> {
        member.validate()?;

        self.conn.execute(
            "INSERT INTO members (
                id,
                full_name,
                father_id,
                generation,
                dob_lunar,
                dod_lunar,
                avatar_url,
                note,
                biography,
                achievements
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                member.id,
                member.full_name.as_str(),
                member.father_id,
                member.generation,
                member.dob_lunar.as_deref(),
                member.dod_lunar.as_deref(),
                member.avatar_url.as_deref(),
                member.note.as_deref(),
                member.biography.as_deref(),
                member.achievements.as_deref(),
            ],
        )?;

        Ok(member.id)
    }

    fn update_member(&self, member: &Member) -> RepoResult<()> {
        member.validate()?;

        let changed = self.conn.execute(
            "UPDATE members
             SET
                full_name = ?1,
                father_id = ?2,
                generation = ?3,
                dob_lunar = ?4,
                dod_lunar = ?5,
                avatar_url = ?6,
                note = ?7,
                biography = ?8,
                achievements = ?9,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?10;",
            params![
                member.full_name.as_str(),
                member.father_id,
                member.generation,
                member.dob_lunar.as_deref(),
                member.dod_lunar.as_deref(),
                member.avatar_url.as_deref(),
                member.note.as_deref(),
                member.biography.as_deref(),
                member.achievements.as_deref(),
                member.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(member.id));
        }

        Ok(())
    }
}

/// In-memory member repository for callers that materialize the snapshot
/// elsewhere (imports, fixtures, tests).
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Vec<Member>,
}

impl InMemoryMemberRepository {
    /// Creates a repository over an already-materialized member set.
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }
}

impl MemberRepository for InMemoryMemberRepository {
    fn fetch_all_members(&self) -> RepoResult<Vec<Member>> {
        Ok(self.members.clone())
    }

    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>> {
        Ok(self.members.iter().find(|member| member.id == id).cloned())
    }

    fn create_member(&self, member: &Member) -> RepoResult<MemberId> {
        member.validate()?;
        Err(RepoError::InvalidData(format!(
            "in-memory repository is read-only; cannot create member {}",
            member.id
        )))
    }

    fn update_member(&self, member: &Member) -> RepoResult<()> {
        member.validate()?;
        Err(RepoError::InvalidData(format!(
            "in-memory repository is read-only; cannot update member {}",
            member.id
        )))
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<Member> {
    let member = Member {
        id: row.get("id")?,
        full_name: row.get("full_name")?,
        father_id: row.get("father_id")?,
        generation: row.get("generation")?,
        dob_lunar: row.get("dob_lunar")?,
        dod_lunar: row.get("dod_lunar")?,
        avatar_url: row.get("avatar_url")?,
        note: row.get("note")?,
        biography: row.get("biography")?,
        achievements: row.get("achievements")?,
    };

    if member.full_name.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "blank full_name for member {} in members.full_name",
            member.id
        )));
    }

    Ok(member)
}

fn ensure_member_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "members")? {
        return Err(RepoError::MissingRequiredTable("members"));
    }

    for column in [
        "id",
        "full_name",
        "father_id",
        "generation",
        "dob_lunar",
        "dod_lunar",
        "avatar_url",
        "note",
        "biography",
        "achievements",
    ] {
        if !table_has_column(conn, "members", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "members",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
