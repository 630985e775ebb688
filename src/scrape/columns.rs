// src/scrape/columns.rs
//
// Header → role heuristics. Each role picks the first header label (by position) that
// matches; roles are resolved independently, so one header may serve two roles.
// Cells are keyed by label, so a repeated label reads from its last column.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Team,
    Points,
    Nrr,
    Won,
}

impl Role {
    pub const NUMERIC: [Role; 3] = [Role::Points, Role::Nrr, Role::Won];

    fn matches(self, header: &str) -> bool {
        match self {
            Role::Team => header.contains("team") || header.contains("club"),
            Role::Points => header.contains("point") || header == "p" || header == "pt",
            Role::Nrr => header.contains("nrr"),
            Role::Won => header.contains("won"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Team => "team",
            Role::Points => "points",
            Role::Nrr => "nrr",
            Role::Won => "won",
        }
    }
}

/// A header chosen for a role: its label and its position in the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub label: String,
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub team: Column,
    pub points: Option<Column>,
    pub nrr: Option<Column>,
    pub won: Option<Column>,
}

impl ColumnMap {
    /// `None` only when there are no headers at all; otherwise team falls back to column 0.
    pub fn infer(headers: &[String]) -> Option<ColumnMap> {
        headers.first()?;
        let team = find(headers, Role::Team).unwrap_or_else(|| column_for(headers, 0));
        Some(ColumnMap {
            team,
            points: find(headers, Role::Points),
            nrr: find(headers, Role::Nrr),
            won: find(headers, Role::Won),
        })
    }

    pub fn get(&self, role: Role) -> Option<&Column> {
        match role {
            Role::Team => Some(&self.team),
            Role::Points => self.points.as_ref(),
            Role::Nrr => self.nrr.as_ref(),
            Role::Won => self.won.as_ref(),
        }
    }
}

fn find(headers: &[String], role: Role) -> Option<Column> {
    headers
        .iter()
        .position(|h| role.matches(h))
        .map(|first| column_for(headers, first))
}

/// Column for the label at `first`, reading from the last header with that label.
fn column_for(headers: &[String], first: usize) -> Column {
    let label = &headers[first];
    let index = headers.iter().rposition(|h| h == label).unwrap_or(first);
    Column { label: label.clone(), index }
}

impl fmt::Display for ColumnMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team='{}'", self.team.label)?;
        for role in Role::NUMERIC {
            match self.get(role) {
                Some(c) => write!(f, " {}='{}'", role.name(), c.label)?,
                None => write!(f, " {}=-", role.name())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cricclubs_headers() {
        let map = ColumnMap::infer(&h(&["#", "team name", "mat", "won", "lost", "n/r", "tie", "pts", "win %", "net rr (nrr)"]))
            .unwrap();
        assert_eq!(map.team.index, 1);
        assert_eq!(map.won.as_ref().map(|c| c.index), Some(3));
        assert_eq!(map.nrr.as_ref().map(|c| c.label.as_str()), Some("net rr (nrr)"));
        // "pts" is neither "p" nor "pt" and has no "point"
        assert!(map.points.is_none());
    }

    #[test]
    fn points_exact_short_forms() {
        let map = ColumnMap::infer(&h(&["club", "p", "w"])).unwrap();
        assert_eq!(map.points.unwrap().index, 1);
        let map = ColumnMap::infer(&h(&["club", "pt"])).unwrap();
        assert_eq!(map.points.unwrap().index, 1);
        let map = ColumnMap::infer(&h(&["club", "total points", "points"])).unwrap();
        assert_eq!(map.points.unwrap().index, 1);
    }

    #[test]
    fn team_falls_back_to_first_column() {
        let map = ColumnMap::infer(&h(&["side", "won"])).unwrap();
        assert_eq!(map.team, Column { label: s!("side"), index: 0 });
        assert!(map.points.is_none());
        assert!(map.nrr.is_none());
    }

    #[test]
    fn empty_headers_map_nothing() {
        assert!(ColumnMap::infer(&[]).is_none());
    }

    #[test]
    fn display_names_each_role() {
        let map = ColumnMap::infer(&h(&["team", "points"])).unwrap();
        assert_eq!(map.to_string(), "team='team' points='points' nrr=- won=-");
    }

    #[test]
    fn repeated_label_reads_last_column() {
        let map = ColumnMap::infer(&h(&["team", "points", "won", "points", "team"])).unwrap();
        assert_eq!(map.points, Some(Column { label: s!("points"), index: 3 }));
        assert_eq!(map.team.index, 4);
        // first match decides the label, even if a later label also matches
        let map = ColumnMap::infer(&h(&["pt", "points", "pt"])).unwrap();
        assert_eq!(map.points, Some(Column { label: s!("pt"), index: 2 }));
    }

    #[test]
    fn fallback_team_label_repeated() {
        let map = ColumnMap::infer(&h(&["", "won", ""])).unwrap();
        assert_eq!(map.team, Column { label: s!(""), index: 2 });
    }
}
