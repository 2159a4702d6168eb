//! Text-painted room projects loaded from TOML.
//!
//! Each room lists its rows as strings, one glyph per cell: `#` for a wall,
//! `.` for walkable floor and `S` for the spawn marker.

use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context, Result};
use map_maker_core::{CellCoord, PaintTool, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};
use map_maker_system_editor::{EditorConfig, EditorSession};
use serde::Deserialize;

const WALL_GLYPH: char = '#';
const WALKABLE_GLYPH: char = '.';
const SPAWN_GLYPH: char = 'S';

/// Room project parsed from a TOML file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Project {
    #[serde(default)]
    canvas: CanvasSection,
    #[serde(default)]
    rooms: Vec<RoomSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CanvasSection {
    #[serde(default = "default_width")]
    default_width: u32,
    #[serde(default = "default_height")]
    default_height: u32,
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_ROOM_WIDTH,
            default_height: DEFAULT_ROOM_HEIGHT,
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_ROOM_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_ROOM_HEIGHT
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomSpec {
    name: String,
    #[serde(default)]
    rows: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Glyph {
    Wall,
    Walkable,
    Spawn,
}

impl Project {
    /// Reads and validates the project stored at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read room project at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid room project at {}", path.display()))
    }

    /// Parses and validates project TOML contents.
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        let project: Self =
            toml::from_str(contents).context("failed to parse room project toml contents")?;

        ensure_unique_names(&project.rooms)?;
        Ok(project)
    }

    /// Editor configuration derived from the `[canvas]` section.
    pub(crate) fn editor_config(&self) -> EditorConfig {
        EditorConfig::new(self.canvas.default_width, self.canvas.default_height)
    }

    /// Paints and commits every room of the project through the session.
    pub(crate) fn paint_into(&self, session: &mut EditorSession) -> Result<()> {
        for room in &self.rooms {
            paint_room(room, session)
                .with_context(|| format!("failed to paint room '{}'", room.name))?;
        }
        Ok(())
    }
}

fn ensure_unique_names(rooms: &[RoomSpec]) -> Result<()> {
    let mut seen = HashSet::with_capacity(rooms.len());
    for room in rooms {
        if !seen.insert(room.name.as_str()) {
            bail!("room project contains duplicate room '{}'", room.name);
        }
    }
    Ok(())
}

fn paint_room(room: &RoomSpec, session: &mut EditorSession) -> Result<()> {
    let grid = parse_rows(&room.rows)?;
    let height = u32::try_from(grid.len()).context("room has too many rows")?;
    let width = match grid.first() {
        Some(row) => u32::try_from(row.len()).context("room has too many columns")?,
        None => 0,
    };
    fit_canvas(session, width, height)?;

    for (row, glyphs) in grid.iter().enumerate() {
        for (column, glyph) in glyphs.iter().enumerate() {
            let cell = CellCoord::new(column as u32, row as u32);
            match glyph {
                Glyph::Wall => {
                    session.select_tool(PaintTool::Wall);
                    session.stroke(cell)?;
                }
                Glyph::Walkable => {
                    session.select_tool(PaintTool::Walkable);
                    session.stroke(cell)?;
                }
                Glyph::Spawn => session.place_spawn(cell)?,
            }
        }
    }

    session.commit(&room.name)?;
    Ok(())
}

fn parse_rows(rows: &[String]) -> Result<Vec<Vec<Glyph>>> {
    let mut grid: Vec<Vec<Glyph>> = Vec::with_capacity(rows.len());
    for (row, text) in rows.iter().enumerate() {
        let glyphs = text
            .chars()
            .enumerate()
            .map(|(column, glyph)| match glyph {
                WALL_GLYPH => Ok(Glyph::Wall),
                WALKABLE_GLYPH => Ok(Glyph::Walkable),
                SPAWN_GLYPH => Ok(Glyph::Spawn),
                other => bail!("unknown glyph '{other}' at row {row}, column {column}"),
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(first) = grid.first() {
            if first.len() != glyphs.len() {
                bail!(
                    "row {row} has {} cells; expected {}",
                    glyphs.len(),
                    first.len()
                );
            }
        }
        grid.push(glyphs);
    }
    Ok(grid)
}

fn fit_canvas(session: &mut EditorSession, width: u32, height: u32) -> Result<()> {
    while session.canvas().width() < width {
        session.grow_width()?;
    }
    while session.canvas().width() > width {
        session.shrink_width()?;
    }
    while session.canvas().height() < height {
        session.grow_height()?;
    }
    while session.canvas().height() > height {
        session.shrink_height()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_maker_core::{CellState, DiagnosticEvent, SpawnPos};

    fn painted(contents: &str) -> EditorSession {
        let project = Project::parse(contents).expect("project parses");
        let mut session = EditorSession::new(project.editor_config());
        project.paint_into(&mut session).expect("rooms paint");
        session
    }

    #[test]
    fn rooms_are_sized_to_their_rows() {
        let session = painted(
            r##"
            [[rooms]]
            name = "hall"
            rows = ["#.#", "#S#"]
            "##,
        );

        let hall = session.rooms().get("hall").expect("room committed");
        assert_eq!(hall.dimensions(), (3, 2));
        assert_eq!(hall.cell(CellCoord::new(0, 0)), Some(CellState::Wall));
        assert_eq!(hall.cell(CellCoord::new(1, 0)), Some(CellState::Empty));
        assert_eq!(hall.cell(CellCoord::new(1, 1)), Some(CellState::Spawn));
    }

    #[test]
    fn canvas_section_sets_draft_dimensions() {
        let project = Project::parse(
            r#"
            [canvas]
            default_width = 4
            "#,
        )
        .expect("project parses");

        assert_eq!(project.editor_config(), EditorConfig::new(4, DEFAULT_ROOM_HEIGHT));
        assert!(project.rooms.is_empty());
    }

    #[test]
    fn painted_project_exports_in_file_order() {
        let session = painted(
            r##"
            [[rooms]]
            name = "b"
            rows = ["S."]

            [[rooms]]
            name = "a"
            rows = ["..", ".."]
            "##,
        );

        let mut diagnostics: Vec<DiagnosticEvent> = Vec::new();
        let document = session.export(&mut diagnostics);

        assert_eq!(document.rooms[0].name, "b");
        assert_eq!(document.rooms[0].layout, vec![vec![true, false]]);
        assert_eq!(document.rooms[0].spawn_pos, Some(SpawnPos { x: 0, y: 0 }));
        assert_eq!(document.rooms[1].name, "a");
        assert_eq!(diagnostics, vec![DiagnosticEvent::no_spawn("a")]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let project = Project::parse(
            r####"
            [[rooms]]
            name = "hall"
            rows = ["###", "#"]
            "####,
        )
        .expect("project parses");

        let mut session = EditorSession::default();
        let error = project.paint_into(&mut session).unwrap_err();
        assert!(format!("{error:#}").contains("row 1 has 1 cells; expected 3"));
        assert!(session.rooms().is_empty());
    }

    #[test]
    fn unknown_glyphs_are_rejected() {
        let project = Project::parse(
            r##"
            [[rooms]]
            name = "hall"
            rows = ["#x"]
            "##,
        )
        .expect("project parses");

        let error = project
            .paint_into(&mut EditorSession::default())
            .unwrap_err();
        assert!(format!("{error:#}").contains("unknown glyph 'x' at row 0, column 1"));
    }

    #[test]
    fn duplicate_room_names_are_rejected() {
        let error = Project::parse(
            r#"
            [[rooms]]
            name = "hall"

            [[rooms]]
            name = "hall"
            "#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("duplicate room 'hall'"));
    }

    #[test]
    fn blank_room_names_fail_to_commit() {
        let project = Project::parse(
            r#"
            [[rooms]]
            name = ""
            rows = ["S"]
            "#,
        )
        .expect("project parses");

        let mut session = EditorSession::default();
        let error = project.paint_into(&mut session).unwrap_err();
        assert!(format!("{error:#}").contains("room name must not be empty"));
        assert!(session.rooms().is_empty());
    }
}
