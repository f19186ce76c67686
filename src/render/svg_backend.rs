use std::fmt::Write as _;

use crate::core::format_number;
use crate::error::VisResult;
use crate::render::{AxisOrientation, PathFill, Renderer, Scene, TextHAlign};

/// Serializes scenes into standalone SVG documents.
///
/// The host composites the returned markup into its own DOM; this backend
/// never touches a display, so it works identically under a live dashboard
/// and in headless tests.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_svg: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup produced by the most recent render pass.
    #[must_use]
    pub fn svg(&self) -> &str {
        &self.last_svg
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &Scene) -> VisResult<()> {
        self.last_svg = render_svg_document(scene)?;
        Ok(())
    }
}

/// Renders one scene into a complete SVG document string.
pub fn render_svg_document(scene: &Scene) -> VisResult<String> {
    scene.validate()?;

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 {} {}">"#,
        scene.viewport.width, scene.viewport.height,
    );

    if let Some(stylesheet) = &scene.stylesheet {
        let _ = write!(&mut out, "<style>{}</style>", stylesheet);
    }

    if !scene.gradients.is_empty() {
        out.push_str("<defs>");
        for gradient in &scene.gradients {
            let _ = write!(
                &mut out,
                r#"<linearGradient id="{}">"#,
                escape_xml(&gradient.id)
            );
            for stop in &gradient.stops {
                let _ = write!(
                    &mut out,
                    r#"<stop offset="{}%" stop-color="{}""#,
                    format_number(stop.offset_ratio * 100.0),
                    stop.color.css(),
                );
                if let Some(opacity) = stop.opacity {
                    let _ = write!(&mut out, r#" stop-opacity="{}""#, format_number(opacity));
                }
                out.push_str("/>");
            }
            out.push_str("</linearGradient>");
        }
        out.push_str("</defs>");
    }

    for path in &scene.paths {
        let fill = match &path.fill {
            PathFill::None => "none".to_owned(),
            PathFill::Solid(color) => color.css(),
            PathFill::Gradient(id) => format!("url(#{id})"),
        };
        let _ = write!(
            &mut out,
            r#"<path d="{}" fill="{}""#,
            escape_xml(&path.data),
            escape_xml(&fill),
        );
        if let Some(css_class) = &path.css_class {
            let _ = write!(&mut out, r#" class="{}""#, escape_xml(css_class));
        }
        if let Some(stroke) = path.stroke {
            let _ = write!(
                &mut out,
                r#" stroke="{}" stroke-width="{}""#,
                stroke.color.css(),
                format_number(stroke.width_px),
            );
            if stroke.rounded {
                out.push_str(r#" stroke-linejoin="round" stroke-linecap="round""#);
            }
        }
        if let Some(opacity) = path.opacity {
            let _ = write!(&mut out, r#" opacity="{}""#, format_number(opacity));
        }
        out.push_str("/>");
    }

    for axis in &scene.axes {
        let class = match axis.orientation {
            AxisOrientation::Bottom => "axis axis-bottom",
            AxisOrientation::Left => "axis axis-left",
        };
        let _ = write!(
            &mut out,
            r#"<g class="{}" transform="translate({},{})" fill="none" font-size="10">"#,
            class,
            format_number(axis.translate.0),
            format_number(axis.translate.1),
        );
        let domain_data = match axis.orientation {
            AxisOrientation::Bottom => format!("M0,0H{}", format_number(axis.length_px)),
            AxisOrientation::Left => format!("M0,0V{}", format_number(axis.length_px)),
        };
        let _ = write!(
            &mut out,
            r##"<path class="domain" d="{domain_data}" stroke="#000"/>"##,
        );
        for tick in &axis.ticks {
            match axis.orientation {
                AxisOrientation::Bottom => {
                    let _ = write!(
                        &mut out,
                        r##"<g class="tick" transform="translate({},0)"><line y2="6" stroke="#000"/><text fill="#000" y="9" dy="0.71em" text-anchor="middle">{}</text></g>"##,
                        format_number(tick.offset_px),
                        escape_xml(&tick.label),
                    );
                }
                AxisOrientation::Left => {
                    let _ = write!(
                        &mut out,
                        r##"<g class="tick" transform="translate(0,{})"><line x2="-6" stroke="#000"/><text fill="#000" x="-9" dy="0.32em" text-anchor="end">{}</text></g>"##,
                        format_number(tick.offset_px),
                        escape_xml(&tick.label),
                    );
                }
            }
        }
        out.push_str("</g>");
    }

    for label in &scene.labels {
        let anchor = match label.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = write!(
            &mut out,
            r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
            format_number(label.x),
            format_number(label.y),
            format_number(label.font_size_px),
            label.color.css(),
            anchor,
            escape_xml(&label.text),
        );
    }

    out.push_str("</svg>");
    Ok(out)
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
