/// Computed-style signals the rendering engine reports for one element.
///
/// Values are the raw computed strings (`"rgba(0, 0, 0, 0)"`, `"0px"`,
/// `"none"`); `None` means the engine reported nothing for that property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualSignals {
    pub tag: String,
    pub background_color: Option<String>,
    /// Top, right, bottom, left.
    pub border_widths: [Option<String>; 4],
    pub background_image: Option<String>,
    pub box_shadow: Option<String>,
    pub has_role: bool,
    pub has_aria_label: bool,
}

impl VisualSignals {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_background(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_string());
        self
    }

    pub fn with_border_width(mut self, side: usize, width: &str) -> Self {
        if let Some(slot) = self.border_widths.get_mut(side) {
            *slot = Some(width.to_string());
        }
        self
    }

    pub fn with_background_image(mut self, image: &str) -> Self {
        self.background_image = Some(image.to_string());
        self
    }

    pub fn with_box_shadow(mut self, shadow: &str) -> Self {
        self.box_shadow = Some(shadow.to_string());
        self
    }

    pub fn with_role(mut self) -> Self {
        self.has_role = true;
        self
    }

    pub fn with_aria_label(mut self) -> Self {
        self.has_aria_label = true;
        self
    }
}

/// The document's two outermost wrappers; they span the whole window.
const ROOT_TAGS: [&str; 2] = ["html", "body"];

const INTERACTIVE_TAGS: [&str; 5] = ["button", "input", "select", "textarea", "a"];

/// Whether an element counts as content a user would expect to click.
///
/// Each element is judged on its own signals; parents and children are not
/// consulted.
pub fn is_visible(signals: &VisualSignals) -> bool {
    let tag = signals.tag.to_ascii_lowercase();
    if ROOT_TAGS.contains(&tag.as_str()) {
        return false;
    }

    has_visible_background(signals.background_color.as_deref())
        || signals
            .border_widths
            .iter()
            .any(|w| has_nonzero_length(w.as_deref()))
        || is_set_and_not_none(signals.background_image.as_deref())
        || is_set_and_not_none(signals.box_shadow.as_deref())
        || INTERACTIVE_TAGS.contains(&tag.as_str())
        || signals.has_role
        || signals.has_aria_label
}

fn has_visible_background(color: Option<&str>) -> bool {
    let Some(color) = color.map(str::trim).filter(|c| !c.is_empty()) else {
        return false;
    };
    if color.eq_ignore_ascii_case("transparent") {
        return false;
    }
    alpha_channel(color).map_or(true, |alpha| alpha > 0.0)
}

/// Alpha of an `rgba(...)` color, `None` for any other notation.
fn alpha_channel(color: &str) -> Option<f32> {
    let lower = color.to_ascii_lowercase();
    let inner = lower.strip_prefix("rgba(")?.strip_suffix(')')?;
    let alpha = inner.split(',').nth(3)?.trim();
    match alpha.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f32>().ok().map(|p| p / 100.0),
        None => alpha.parse::<f32>().ok(),
    }
}

fn has_nonzero_length(width: Option<&str>) -> bool {
    let Some(width) = width.map(str::trim).filter(|w| !w.is_empty()) else {
        return false;
    };
    let numeric: String = width
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    match numeric.parse::<f32>() {
        Ok(value) => value != 0.0,
        // Keywords such as `thin` or `medium` always paint something.
        Err(_) => true,
    }
}

fn is_set_and_not_none(value: Option<&str>) -> bool {
    value
        .map(str::trim)
        .is_some_and(|v| !v.is_empty() && !v.eq_ignore_ascii_case("none"))
}
