//! Arcanum - procedurally generated magic-circle diagrams.
//!
//! A spell is described by six attributes (see [`spell`]). Each attribute is
//! drawn as a sigil, a circle with a star polygon inscribed in it, and the
//! sigils are packed around a central circle by the [`layout`] engine. The
//! finished [`layout::Diagram`] is replayed onto an SVG renderer.

pub mod config;
pub mod export;
pub mod layout;
pub mod spell;

mod error;

pub use arcanum_core::{color, draw, geometry, path, shape};

pub use error::ArcanumError;

use std::path::{Component, Path, PathBuf};

use log::{debug, info, trace};

use arcanum_core::draw::RenderTarget;

use config::AppConfig;
use export::svg::SvgRenderer;
use layout::Diagram;
use spell::SpellAttributes;

/// File extension of rendered diagrams.
pub const OUTPUT_EXTENSION: &str = "svg";

/// Builder for laying out and rendering Arcanum diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use arcanum::{DiagramBuilder, config::AppConfig, spell::SpellAttributes};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let magic_missile = SpellAttributes::new(None, 3, 1, 1, 4, 1);
/// let diagram = builder.build(magic_missile).expect("Failed to lay out");
///
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// println!("{svg}");
///
/// // Or write `magic_missile.svg` into the current directory
/// builder
///     .save_svg(&diagram, ".", "magic_missile")
///     .expect("Failed to save");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay out the sigils of a spell.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::Geometry`] when the configured canvas or
    /// precision produce a non-positive radius or precision.
    pub fn build(&self, attributes: SpellAttributes) -> Result<Diagram, ArcanumError> {
        info!(school_index = attributes.school_index(); "Building diagram");

        let diagram = Diagram::new(attributes, &self.config.layout_options())?;

        debug!(
            central_radius = diagram.central_radius(),
            outer_radius = diagram.outer_radius();
            "Diagram laid out"
        );
        trace!(diagram:?; "Built diagram");

        Ok(diagram)
    }

    /// Draw a diagram onto a fresh SVG renderer.
    ///
    /// The pen is configured once before any sigil is drawn. Each call
    /// returns a new renderer, so diagrams never share drawing state.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::Config`] if the configured colors are invalid.
    pub fn renderer(&self, diagram: &Diagram) -> Result<SvgRenderer, ArcanumError> {
        let style = self.config.style();
        let mut renderer = SvgRenderer::new(self.config.canvas().size())
            .with_background(style.background_color()?);

        renderer.set_stroke(&style.stroke()?);
        diagram.draw(&mut renderer);

        debug!(ops = renderer.op_count(); "Diagram drawn");
        Ok(renderer)
    }

    /// Render a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::Config`] for invalid style settings or
    /// [`ArcanumError::Export`] if the drawing cannot be serialized.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, ArcanumError> {
        let svg = self.renderer(diagram)?.render_string()?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render a diagram and write it to `<output_dir>/<label>.svg`.
    ///
    /// The label is chosen by the caller; it is typically the spell's name.
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::InvalidLabel`] if `label` is not a plain file
    /// name, [`ArcanumError::Export`] if the file cannot be written, or any
    /// error from [`renderer`](Self::renderer).
    pub fn save_svg(
        &self,
        diagram: &Diagram,
        output_dir: impl AsRef<Path>,
        label: &str,
    ) -> Result<PathBuf, ArcanumError> {
        let file_name = output_file_name(output_dir, label)?;
        self.renderer(diagram)?.save(&file_name)?;

        info!(file_name = file_name.display().to_string(); "SVG exported successfully");
        Ok(file_name)
    }
}

/// Checks that `label` can name a file directly inside an output directory.
///
/// A valid label is non-empty, is not `.` or `..`, and contains no path
/// separator, so the file it names can never land outside the directory.
///
/// # Errors
///
/// Returns [`ArcanumError::InvalidLabel`] otherwise.
pub fn validate_label(label: &str) -> Result<&str, ArcanumError> {
    let mut components = Path::new(label).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == label
    );

    if plain && !label.contains(['/', '\\']) {
        Ok(label)
    } else {
        Err(ArcanumError::InvalidLabel(label.to_string()))
    }
}

/// The output path for a diagram labelled `label`.
///
/// # Errors
///
/// Returns [`ArcanumError::InvalidLabel`] if `label` fails [`validate_label`].
///
/// # Examples
///
/// ```
/// # use std::path::Path;
/// let path = arcanum::output_file_name("out", "wall_of_fire").unwrap();
/// assert_eq!(path, Path::new("out/wall_of_fire.svg"));
///
/// assert!(arcanum::output_file_name("out", "../escaped").is_err());
/// ```
pub fn output_file_name(
    output_dir: impl AsRef<Path>,
    label: &str,
) -> Result<PathBuf, ArcanumError> {
    let label = validate_label(label)?;
    Ok(output_dir
        .as_ref()
        .join(format!("{label}.{OUTPUT_EXTENSION}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        for label in ["magic_missile", "wall of fire", "spell.v2", "..hidden"] {
            assert_eq!(validate_label(label).unwrap(), label);
        }

        for label in ["", ".", "..", "../escaped", "nested/spell", "spell/", "/abs", "a\\b"] {
            assert!(
                matches!(validate_label(label), Err(ArcanumError::InvalidLabel(ref l)) if l == label),
                "{label:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_output_file_name_stays_in_dir() {
        let path = output_file_name("out", "blade_of_disaster").unwrap();
        assert_eq!(path.parent(), Some(Path::new("out")));
        assert!(output_file_name("out", "../../etc/passwd").is_err());
    }
}
