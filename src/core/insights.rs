//! Attendance and birthday insights over small in-memory lists.

use crate::db::pool::DbPool;
use crate::db::queries::{attendance_history, load_roster};
use crate::errors::AppResult;
use crate::models::attendance::AttendanceStatus;
use crate::models::person::Person;
use crate::ui::messages::{header, info};
use crate::utils::formatting::percent;
use crate::utils::table::{Column, Table};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Consecutive most recent events the person was present at.
///
/// `history` is newest first. A missing record breaks the streak the same
/// way an absence does.
pub fn attendance_streak(history: &[(NaiveDate, Option<AttendanceStatus>)]) -> u32 {
    history
        .iter()
        .take_while(|(_, status)| matches!(status, Some(AttendanceStatus::Present)))
        .count() as u32
}

/// Present share of the recorded decisions. `None` when nothing was recorded.
pub fn attendance_rate(history: &[(NaiveDate, Option<AttendanceStatus>)]) -> Option<f64> {
    let recorded: Vec<AttendanceStatus> = history.iter().filter_map(|(_, s)| *s).collect();
    if recorded.is_empty() {
        return None;
    }
    let present = recorded.iter().filter(|s| s.is_present()).count();
    Some(present as f64 / recorded.len() as f64)
}

/// Birthday as observed in `year`. Feb 29 falls back to Feb 28.
pub fn birthday_in_year(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Whole years on `as_of`; `None` for a birth date in the future.
pub fn age_on(birth: NaiveDate, as_of: NaiveDate) -> Option<u32> {
    if birth > as_of {
        return None;
    }
    let mut years = as_of.year() - birth.year();
    if birthday_in_year(birth, as_of.year()).is_some_and(|b| b > as_of) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LifeStage {
    Child,
    Teen,
    YoungAdult,
    Adult,
    Senior,
    Unknown,
}

impl LifeStage {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => LifeStage::Child,
            13..=17 => LifeStage::Teen,
            18..=29 => LifeStage::YoungAdult,
            30..=54 => LifeStage::Adult,
            _ => LifeStage::Senior,
        }
    }

    pub fn from_birth(birth: Option<NaiveDate>, as_of: NaiveDate) -> Self {
        birth
            .and_then(|b| age_on(b, as_of))
            .map(Self::from_age)
            .unwrap_or(LifeStage::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LifeStage::Child => "child",
            LifeStage::Teen => "teen",
            LifeStage::YoungAdult => "young adult",
            LifeStage::Adult => "adult",
            LifeStage::Senior => "senior",
            LifeStage::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingBirthday {
    pub person: Person,
    pub date: NaiveDate,
    pub days_until: i64,
    pub turning: u32,
}

/// Next observed birthday on or after `as_of`.
pub fn next_birthday(birth: NaiveDate, as_of: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday_in_year(birth, as_of.year())?;
    if this_year >= as_of {
        Some(this_year)
    } else {
        birthday_in_year(birth, as_of.year() + 1)
    }
}

/// Members whose birthday falls within `window_days` of `as_of` (today
/// included), soonest first, ties by name.
pub fn upcoming_birthdays(
    people: &[Person],
    as_of: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    let mut out: Vec<UpcomingBirthday> = people
        .iter()
        .filter_map(|p| {
            let birth = p.birth_date?;
            if birth > as_of {
                return None;
            }
            let date = next_birthday(birth, as_of)?;
            let days_until = (date - as_of).num_days();
            if days_until > i64::from(window_days) {
                return None;
            }
            Some(UpcomingBirthday {
                person: p.clone(),
                date,
                days_until,
                turning: u32::try_from(date.year() - birth.year()).unwrap_or(0),
            })
        })
        .collect();

    out.sort_by(|a, b| {
        a.days_until
            .cmp(&b.days_until)
            .then_with(|| a.person.name.to_lowercase().cmp(&b.person.name.to_lowercase()))
    });
    out
}

/// Per-member summary printed by `togather insights`.
#[derive(Debug, Clone, Serialize)]
pub struct MemberInsight {
    pub person: Person,
    pub streak: u32,
    pub rate: Option<f64>,
    pub stage: LifeStage,
}

impl MemberInsight {
    pub fn build(
        person: Person,
        history: &[(NaiveDate, Option<AttendanceStatus>)],
        as_of: NaiveDate,
    ) -> Self {
        let stage = LifeStage::from_birth(person.birth_date, as_of);
        Self {
            streak: attendance_streak(history),
            rate: attendance_rate(history),
            stage,
            person,
        }
    }
}

/// `togather insights`: member table plus the birthday list.
pub struct InsightLogic;

impl InsightLogic {
    pub fn collect(pool: &DbPool, as_of: NaiveDate) -> AppResult<Vec<MemberInsight>> {
        let mut out = Vec::new();
        for person in load_roster(&pool.conn)? {
            let history = attendance_history(&pool.conn, person.id, &as_of)?;
            out.push(MemberInsight::build(person, &history, as_of));
        }
        Ok(out)
    }

    pub fn print(pool: &DbPool, group_name: &str, as_of: NaiveDate, window_days: u32) -> AppResult<()> {
        let insights = Self::collect(pool, as_of)?;
        if insights.is_empty() {
            info("No active members yet.");
            return Ok(());
        }

        println!("{}\n", header(format!("{} insights as of {}", group_name, as_of)));

        let mut table = Table::new(vec![
            Column::new("Name"),
            Column::new("Streak"),
            Column::new("Rate"),
            Column::new("Life stage"),
        ]);
        for i in &insights {
            table.add_row(vec![
                i.person.name.clone(),
                i.streak.to_string(),
                percent(i.rate),
                i.stage.label().to_string(),
            ]);
        }
        print!("{}", table.render());

        let people: Vec<Person> = insights.into_iter().map(|i| i.person).collect();
        let birthdays = upcoming_birthdays(&people, as_of, window_days);

        println!("\n🎂 Birthdays in the next {} days:", window_days);
        if birthdays.is_empty() {
            println!("   none");
        }
        for b in &birthdays {
            let when = match b.days_until {
                0 => "today".to_string(),
                1 => "tomorrow".to_string(),
                n => format!("in {} days", n),
            };
            println!(
                "   {} turns {} on {} ({})",
                b.person.name,
                b.turning,
                b.date.format("%d %b"),
                when
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AttendanceStatus::{Absent, Present};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let history = vec![
            (d("2025-09-21"), Some(Present)),
            (d("2025-09-14"), Some(Present)),
            (d("2025-09-07"), None),
            (d("2025-08-31"), Some(Present)),
        ];
        assert_eq!(attendance_streak(&history), 2);
        assert_eq!(attendance_streak(&[]), 0);
        assert_eq!(attendance_streak(&[(d("2025-09-21"), Some(Absent))]), 0);
    }

    #[test]
    fn rate_ignores_unrecorded_events() {
        let history = vec![
            (d("2025-09-21"), Some(Present)),
            (d("2025-09-14"), None),
            (d("2025-09-07"), Some(Absent)),
        ];
        assert_eq!(attendance_rate(&history), Some(0.5));
        assert_eq!(attendance_rate(&[(d("2025-09-14"), None)]), None);
    }

    #[test]
    fn life_stage_buckets_by_age() {
        let as_of = d("2025-10-01");
        assert_eq!(LifeStage::from_birth(Some(d("2015-01-01")), as_of), LifeStage::Child);
        assert_eq!(LifeStage::from_birth(Some(d("2010-01-01")), as_of), LifeStage::Teen);
        // turns 18 tomorrow
        assert_eq!(LifeStage::from_birth(Some(d("2007-10-02")), as_of), LifeStage::Teen);
        assert_eq!(
            LifeStage::from_birth(Some(d("2007-10-01")), as_of),
            LifeStage::YoungAdult
        );
        assert_eq!(LifeStage::from_birth(Some(d("1980-05-05")), as_of), LifeStage::Adult);
        assert_eq!(LifeStage::from_birth(Some(d("1950-05-05")), as_of), LifeStage::Senior);
        assert_eq!(LifeStage::from_birth(None, as_of), LifeStage::Unknown);
        assert_eq!(LifeStage::from_birth(Some(d("2030-01-01")), as_of), LifeStage::Unknown);
    }

    #[test]
    fn leap_day_birthday_observed_on_feb_28() {
        let birth = d("2000-02-29");
        assert_eq!(next_birthday(birth, d("2025-02-01")), Some(d("2025-02-28")));
        assert_eq!(next_birthday(birth, d("2028-02-01")), Some(d("2028-02-29")));
        assert_eq!(age_on(birth, d("2025-02-28")), Some(25));
        assert_eq!(age_on(birth, d("2025-02-27")), Some(24));
    }

    #[test]
    fn upcoming_birthdays_wrap_year_and_sort() {
        let people = vec![
            Person::new(1, "Yosef").with_birth_date(d("1990-01-03")),
            Person::new(2, "Maria").with_birth_date(d("1995-12-30")),
            Person::new(3, "Anna").with_birth_date(d("1988-01-03")),
            Person::new(4, "Paulus").with_birth_date(d("1970-06-01")),
            Person::new(5, "Tanpa Tanggal"),
        ];

        let list = upcoming_birthdays(&people, d("2025-12-28"), 7);
        let names: Vec<&str> = list.iter().map(|b| b.person.name.as_str()).collect();
        assert_eq!(names, vec!["Maria", "Anna", "Yosef"]);
        assert_eq!(list[0].days_until, 2);
        assert_eq!(list[1].date, d("2026-01-03"));
        assert_eq!(list[1].turning, 38);
    }

    #[test]
    fn birthday_today_is_included() {
        let people = vec![Person::new(1, "Lukas").with_birth_date(d("2001-10-14"))];
        let list = upcoming_birthdays(&people, d("2025-10-14"), 0);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].days_until, 0);
        assert_eq!(list[0].turning, 24);
    }
}
