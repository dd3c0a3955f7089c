//! Draw list for one frame
//!
//! Everything an external renderer needs, already projected to pixel space.
//! Polygons are listed back to front: grid, food, body (tail first), head.

use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::geometry::{Layout, Point};
use crate::hex::Hex;

const HUD_MARGIN: f32 = 10.0;
const HUD_LINE_HEIGHT: f32 = 30.0;
const OVERLAY_LINE_HEIGHT: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// Outline only
    Grid,
    Food,
    Body,
    Head,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub fill: Fill,
    pub cell: Hex,
    pub points: [Point; 6],
}

/// Which point of the text box `position` refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub anchor: Anchor,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub polygons: Vec<Polygon>,
    pub labels: Vec<Label>,
    /// Dim the frame behind the game-over text
    pub overlay: bool,
}

impl Scene {
    pub fn build(state: &GameState, layout: &Layout) -> Self {
        let config = state.config();
        let mut polygons = Vec::new();

        if config.show_grid {
            for cell in config.board.cells() {
                polygons.push(polygon(layout, Fill::Grid, cell));
            }
        }

        if let Some(food) = state.food() {
            polygons.push(polygon(layout, Fill::Food, food));
        }

        let cells = state.snake().cells();
        for &cell in cells.iter().skip(1).rev() {
            polygons.push(polygon(layout, Fill::Body, cell));
        }
        polygons.push(polygon(layout, Fill::Head, state.snake().head()));

        let width = config.window.width;
        let height = config.window.height;
        let mut labels = Vec::new();

        if config.show_hud {
            labels.push(Label {
                text: format!("Score: {}", state.score()),
                position: Point::new(HUD_MARGIN, HUD_MARGIN),
                anchor: Anchor::TopLeft,
            });
            for (i, line) in config.key_map.help().into_iter().enumerate() {
                labels.push(Label {
                    text: line.to_string(),
                    position: Point::new(width as f32 - HUD_MARGIN, HUD_MARGIN + i as f32 * HUD_LINE_HEIGHT),
                    anchor: Anchor::TopRight,
                });
            }
        }

        if state.is_over() {
            let cx = width as f32 / 2.0;
            let cy = height as f32 / 2.0;
            let lines = [
                "Game over!".to_string(),
                format!("Score: {}", state.score()),
                "Press R to restart".to_string(),
            ];
            for (i, text) in lines.into_iter().enumerate() {
                labels.push(Label {
                    text,
                    position: Point::new(cx, cy + (i as f32 - 1.0) * OVERLAY_LINE_HEIGHT),
                    anchor: Anchor::Center,
                });
            }
        }

        Self {
            width,
            height,
            polygons,
            labels,
            overlay: state.is_over(),
        }
    }

    pub fn count(&self, fill: Fill) -> usize {
        self.polygons.iter().filter(|p| p.fill == fill).count()
    }
}

fn polygon(layout: &Layout, fill: Fill, cell: Hex) -> Polygon {
    Polygon {
        fill,
        cell,
        points: layout.corners(cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::hex::Direction;
    use crate::snake::Snake;

    fn three_cell_game(config: GameConfig) -> GameState {
        let start = config.board.start_cell();
        let body = Snake::from_cells([start, start + Direction::NorthWest, start + Direction::NorthWest + Direction::NorthWest]).unwrap();
        GameState::new(config, Some(5)).unwrap().with_snake(body, Direction::SouthEast).unwrap()
    }

    #[test]
    fn test_bounded_scene() {
        let state = three_cell_game(GameConfig::bounded());
        let layout = state.config().layout();
        let scene = Scene::build(&state, &layout);

        assert_eq!(scene.count(Fill::Grid), 225);
        assert_eq!(scene.count(Fill::Food), 1);
        assert_eq!(scene.count(Fill::Body), 2);
        assert_eq!(scene.count(Fill::Head), 1);
        assert!(scene.labels.is_empty());
        assert!(!scene.overlay);

        let head = scene.polygons.last().unwrap();
        assert_eq!(head.fill, Fill::Head);
        assert_eq!(head.cell, state.snake().head());
        let center = layout.to_pixel(head.cell);
        for p in head.points {
            assert!((p.distance_to(center) - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_radial_hud_and_overlay() {
        let mut state = three_cell_game(GameConfig::radial());
        let layout = state.config().layout();

        let scene = Scene::build(&state, &layout);
        assert_eq!(scene.count(Fill::Grid), 0);
        assert_eq!(scene.labels[0].text, "Score: 0");
        assert!(scene.labels.iter().any(|l| l.text == "R: restart"));

        while !state.is_over() {
            state.tick();
        }
        let scene = Scene::build(&state, &layout);
        assert!(scene.overlay);
        assert!(scene.labels.iter().any(|l| l.text == "Press R to restart" && l.anchor == Anchor::Center));
    }
}
