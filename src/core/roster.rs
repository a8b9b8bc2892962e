use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{deactivate_member, insert_member, load_member, load_roster};
use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use crate::models::session::Session;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Member roster use cases.
pub struct RosterLogic;

impl RosterLogic {
    pub fn add(
        pool: &DbPool,
        session: &Session,
        name: &str,
        avatar: Option<String>,
        birth_date: Option<NaiveDate>,
    ) -> AppResult<i64> {
        session.require_manage("add members")?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("Member name cannot be empty".into()));
        }

        let person = Person {
            id: 0,
            name: name.to_string(),
            avatar,
            birth_date,
        };
        let id = insert_member(&pool.conn, &person)?;

        ttlog_quiet(
            &pool.conn,
            "member_add",
            &format!("member {}", id),
            &format!("Added {} (by {})", person.name, session.user_id),
        );
        success(format!("Added member #{}: {}", id, person.name));
        Ok(id)
    }

    pub fn remove(pool: &DbPool, session: &Session, id: i64) -> AppResult<()> {
        session.require_manage("remove members")?;

        let person = load_member(&pool.conn, id)?.ok_or(AppError::MemberNotFound(id))?;
        if !deactivate_member(&pool.conn, id)? {
            return Err(AppError::MemberNotFound(id));
        }

        ttlog_quiet(
            &pool.conn,
            "member_del",
            &format!("member {}", id),
            &format!("Removed {} from roster (by {})", person.name, session.user_id),
        );
        success(format!("Removed member #{}: {}", id, person.name));
        Ok(())
    }

    pub fn list(pool: &DbPool) -> AppResult<()> {
        let roster = load_roster(&pool.conn)?;
        if roster.is_empty() {
            info("No active members. Add one with `togather member add <name>`.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("Name"),
            Column::new("Birth date"),
            Column::new("Avatar"),
        ]);
        for p in &roster {
            let birth = p.birth_date_str();
            table.add_row(vec![
                p.id.to_string(),
                p.name.clone(),
                if birth.is_empty() { "--".into() } else { birth },
                p.avatar.clone().unwrap_or_else(|| "--".into()),
            ]);
        }

        println!("👥 Roster ({} members):\n", roster.len());
        print!("{}", table.render());
        Ok(())
    }
}
