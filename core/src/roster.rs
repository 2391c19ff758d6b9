//! Deterministic demo-roster generation using curated name lists.
//!
//! Used by roster-runner to seed an empty store. Same seed = same
//! roster, so demo runs stay reproducible end to end.

use crate::employee::{Employee, RoleTag};
use crate::rng::RosterRng;

/// Share of generated employees that float between stores.
const GLOBAL_WORKER_SHARE: f64 = 0.2;

pub struct RosterGenerator;

impl RosterGenerator {
    /// Generate `n` active employees. Roughly one in five is a global
    /// worker; at least one store-bound employee carries the
    /// key-holder tag so evening coverage is always satisfiable.
    pub fn generate(rng: &mut RosterRng, n: usize) -> Vec<Employee> {
        let mut roster = Vec::with_capacity(n);
        for i in 0..n {
            roster.push(Employee {
                id: format!("e-{i:03}"),
                name: Self::full_name(rng),
                role: RoleTag::Staff,
                global_worker: rng.chance(GLOBAL_WORKER_SHARE),
                active: true,
            });
        }

        if let Some(e) = roster.iter_mut().find(|e| !e.global_worker) {
            e.role = RoleTag::KeyHolder;
        } else if let Some(e) = roster.first_mut() {
            // All-global roster: pin the first one down and hand them
            // the keys.
            e.global_worker = false;
            e.role = RoleTag::KeyHolder;
        }
        roster
    }

    fn full_name(rng: &mut RosterRng) -> String {
        let first = Self::first_names();
        let last = Self::last_names();
        format!(
            "{} {}",
            first[rng.next_u64_below(first.len() as u64) as usize],
            last[rng.next_u64_below(last.len() as u64) as usize]
        )
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Noa", "Tamar", "Yael", "Amit", "Omer", "Itay", "Shira", "Lior", "Maya", "Daniel",
            "Roni", "Eitan", "Hila", "Yuval", "Adi", "Nadav", "Michal", "Oren", "Talia", "Gal",
            "Avi", "Dana", "Erez", "Noga", "Idan", "Rotem", "Shai", "Efrat", "Barak", "Inbar",
            "Alon", "Sivan", "Tomer", "Keren", "Nir", "Orly", "Assaf", "Liat", "Dov", "Hadar",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Cohen", "Levi", "Mizrahi", "Peretz", "Biton", "Dahan", "Avraham", "Friedman",
            "Katz", "Malka", "Azulay", "Gabay", "Shapiro", "Ben-David", "Amar", "Hazan",
            "Ohayon", "Baruch", "Sharabi", "Edri", "Golan", "Harel", "Segal", "Barak",
        ]
    }
}
