//! Scale-to-fit drawing layout for a surveyed outline.
//!
//! Produces pixel positions and text for a rendering backend; nothing here
//! rasterizes or encodes images.

mod config;
mod notes;
mod render_layout;

pub use config::LayoutConfig;
pub use render_layout::RenderLayout;

use serde::{Deserialize, Serialize};

/// A labelled vertex in canvas pixels (Y grows downwards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexMark {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub label: String,
}

/// A side-length annotation placed at the midpoint of a side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeMark {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub label: String,
    pub text: String,
}

/// Everything a renderer needs to draw an outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Pixels per presentation length unit.
    pub scale: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Size of the scaled outline, without margins.
    pub drawing_width: f64,
    pub drawing_height: f64,
    pub vertices: Vec<VertexMark>,
    pub edges: Vec<EdgeMark>,
    /// Text for the notes column; empty unless notes were requested.
    pub notes: Vec<String>,
}
