use crate::core::format_number;
use crate::error::{VisError, VisResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const LIGHT_BLUE: Self = Self::rgb8(173, 216, 230);
    pub const DARK_BLUE: Self = Self::rgb8(0, 0, 139);
    pub const STEEL_BLUE: Self = Self::rgb8(70, 130, 180);
    pub const AXIS_INK: Self = Self::rgb8(0, 0, 0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    /// Parses `#rgb` or `#rrggbb` palette strings from the color options.
    pub fn from_hex(input: &str) -> VisResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(VisError::InvalidData(format!(
                    "color `{input}` must be #rgb or #rrggbb"
                )));
            }
        };
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| {
                VisError::InvalidData(format!("color `{input}` has non-hex digits"))
            })
        };
        Ok(Self::rgb8(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }

    pub fn validate(self) -> VisResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(VisError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS color string: `#rrggbb`, or `rgba(...)` when translucent.
    #[must_use]
    pub fn css(self) -> String {
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                to_byte(self.red),
                to_byte(self.green),
                to_byte(self.blue)
            )
        } else {
            format!(
                "rgba({},{},{},{})",
                to_byte(self.red),
                to_byte(self.green),
                to_byte(self.blue),
                format_number(self.alpha.clamp(0.0, 1.0))
            )
        }
    }
}

/// Stroke style for paths; `rounded` selects round joins and caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width_px: f64,
    pub rounded: bool,
}

impl Stroke {
    #[must_use]
    pub const fn new(color: Color, width_px: f64, rounded: bool) -> Self {
        Self {
            color,
            width_px,
            rounded,
        }
    }

    pub fn validate(self) -> VisResult<()> {
        if !self.width_px.is_finite() || self.width_px <= 0.0 {
            return Err(VisError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Fill applied to a path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathFill {
    None,
    Solid(Color),
    /// References a gradient definition by id.
    Gradient(String),
}

/// Draw command for one path in pixel space, carrying SVG path data.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub data: String,
    pub fill: PathFill,
    pub stroke: Option<Stroke>,
    pub css_class: Option<String>,
    pub opacity: Option<f64>,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(data: impl Into<String>, fill: PathFill) -> Self {
        Self {
            data: data.into(),
            fill,
            stroke: None,
            css_class: None,
            opacity: None,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn validate(&self) -> VisResult<()> {
        if self.data.is_empty() {
            return Err(VisError::InvalidData(
                "path primitive must carry path data".to_owned(),
            ));
        }
        match &self.fill {
            PathFill::None => {}
            PathFill::Solid(color) => color.validate()?,
            PathFill::Gradient(id) => {
                if id.is_empty() {
                    return Err(VisError::InvalidData(
                        "path gradient reference must not be empty".to_owned(),
                    ));
                }
            }
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        if let Some(opacity) = self.opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(VisError::InvalidData(
                    "path opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> VisResult<()> {
        if self.text.is_empty() {
            return Err(VisError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(VisError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(VisError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Which container edge an axis group sits against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One tick along an axis: pixel offset from the axis origin plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset_px: f64,
    pub label: String,
}

/// Grouped axis output: domain line plus ticks, translated as one element.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGroup {
    pub orientation: AxisOrientation,
    pub translate: (f64, f64),
    pub length_px: f64,
    pub ticks: Vec<AxisTick>,
}

impl AxisGroup {
    #[must_use]
    pub fn new(orientation: AxisOrientation, translate: (f64, f64), length_px: f64) -> Self {
        Self {
            orientation,
            translate,
            length_px,
            ticks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tick(mut self, offset_px: f64, label: impl Into<String>) -> Self {
        self.ticks.push(AxisTick {
            offset_px,
            label: label.into(),
        });
        self
    }

    pub fn validate(&self) -> VisResult<()> {
        if !self.translate.0.is_finite()
            || !self.translate.1.is_finite()
            || !self.length_px.is_finite()
            || self.length_px < 0.0
        {
            return Err(VisError::InvalidData(
                "axis group translate/length must be finite (length >= 0)".to_owned(),
            ));
        }
        for tick in &self.ticks {
            if !tick.offset_px.is_finite() {
                return Err(VisError::InvalidData(
                    "axis tick offset must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// One stop in a linear gradient definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset_ratio: f64,
    pub color: Color,
    pub opacity: Option<f64>,
}

/// Linear gradient definition referenced by fill id.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDef {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl GradientDef {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            stops: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stop(mut self, offset_ratio: f64, color: Color) -> Self {
        self.stops.push(GradientStop {
            offset_ratio,
            color,
            opacity: None,
        });
        self
    }

    #[must_use]
    pub fn with_opaque_stop(mut self, offset_ratio: f64, color: Color, opacity: f64) -> Self {
        self.stops.push(GradientStop {
            offset_ratio,
            color,
            opacity: Some(opacity),
        });
        self
    }

    pub fn validate(&self) -> VisResult<()> {
        if self.id.is_empty() {
            return Err(VisError::InvalidData(
                "gradient id must not be empty".to_owned(),
            ));
        }
        for stop in &self.stops {
            if !stop.offset_ratio.is_finite() || !(0.0..=1.0).contains(&stop.offset_ratio) {
                return Err(VisError::InvalidData(
                    "gradient stop offset must be finite and in [0, 1]".to_owned(),
                ));
            }
            stop.color.validate()?;
            if let Some(opacity) = stop.opacity {
                if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                    return Err(VisError::InvalidData(
                        "gradient stop opacity must be finite and in [0, 1]".to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// SVG path data through a vertex sequence, closed when `close` is set.
#[must_use]
pub fn path_data_from_vertices(vertices: &[(f64, f64)], close: bool) -> String {
    let mut data = String::new();
    for (index, (x, y)) in vertices.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        data.push(command);
        data.push_str(&format_number(*x));
        data.push(',');
        data.push_str(&format_number(*y));
    }
    if close && !data.is_empty() {
        data.push('Z');
    }
    data
}

/// Horizontal cubic ribbon path between two anchor points, the standard
/// sankey link shape.
#[must_use]
pub fn cubic_link_path(source_x: f64, source_y: f64, target_x: f64, target_y: f64) -> String {
    let mid_x = (source_x + target_x) / 2.0;
    format!(
        "M{},{}C{},{},{},{},{},{}",
        format_number(source_x),
        format_number(source_y),
        format_number(mid_x),
        format_number(source_y),
        format_number(mid_x),
        format_number(target_y),
        format_number(target_x),
        format_number(target_y),
    )
}

/// Axis-aligned rectangle as closed path data.
#[must_use]
pub fn rect_path(x: f64, y: f64, width: f64, height: f64) -> String {
    path_data_from_vertices(
        &[(x, y), (x + width, y), (x + width, y + height), (x, y + height)],
        true,
    )
}
