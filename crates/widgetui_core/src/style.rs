//! Class and inline-style payloads produced by the resolvers.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered, de-duplicated list of CSS classes.
///
/// Pushing a whitespace-separated string adds each class once; the first occurrence keeps its
/// position.
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every class in `classes`.
    pub fn push(&mut self, classes: &str) -> &mut Self {
        for class in classes.split_whitespace() {
            if !self.0.iter().any(|existing| existing == class) {
                self.0.push(class.to_string());
            }
        }
        self
    }

    /// Appends `classes` when present.
    pub fn push_opt(&mut self, classes: Option<&str>) -> &mut Self {
        if let Some(classes) = classes {
            self.push(classes);
        }
        self
    }

    /// Appends `classes` when `condition` holds.
    pub fn push_if(&mut self, condition: bool, classes: &str) -> &mut Self {
        if condition {
            self.push(classes);
        }
        self
    }

    /// Whether `class` is present.
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|existing| existing == class)
    }

    /// Whether no class has been pushed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the classes in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Joins class fragments into one normalized class string.
pub fn cn<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut list = ClassList::new();
    for part in parts {
        list.push(part);
    }
    list.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered CSS declarations. Setting a property twice keeps the later value in the earlier slot.
pub struct InlineStyle(Vec<(String, String)>);

impl InlineStyle {
    /// Creates an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property` to `value`, replacing any earlier declaration.
    pub fn set(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| existing == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property.to_string(), value)),
        }
        self
    }

    /// Sets `property` when `value` is present.
    pub fn set_opt(&mut self, property: &str, value: Option<impl Into<String>>) -> &mut Self {
        if let Some(value) = value {
            self.set(property, value);
        }
        self
    }

    /// Returns the current value of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == property)
            .map(|(_, value)| value.as_str())
    }

    /// Applies every declaration of `other` on top of `self`.
    pub fn merge(&mut self, other: &InlineStyle) -> &mut Self {
        for (property, value) in &other.0 {
            self.set(property, value.clone());
        }
        self
    }

    /// Whether no declaration is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders a `style` attribute value.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An sRGB color parsed from `#rrggbb`.
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats the color with the given alpha as `rgba(r, g, b, a)`.
    pub fn rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fully resolved style for one render of a component.
pub struct StyleRecord {
    /// Class list applied to the root element.
    pub classes: ClassList,
    /// Inline declarations applied at rest.
    pub style: InlineStyle,
    /// Declarations layered over `style` while hovered.
    pub hover: InlineStyle,
}

impl StyleRecord {
    /// Class attribute value.
    pub fn class_string(&self) -> String {
        self.classes.to_string()
    }

    /// Style attribute value, including the hover delta when `hovered`.
    pub fn render_style(&self, hovered: bool) -> String {
        if hovered && !self.hover.is_empty() {
            let mut merged = self.style.clone();
            merged.merge(&self.hover);
            merged.to_css()
        } else {
            self.style.to_css()
        }
    }

    /// Whether the record carries neither classes nor declarations.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.style.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn class_list_dedupes_and_normalizes_whitespace() {
        let mut classes = ClassList::new();
        classes.push("flex  flex-row").push("flex").push_opt(Some(" w-full "));
        classes.push_if(false, "hidden");
        assert_eq!(classes.to_string(), "flex flex-row w-full");
    }

    #[test]
    fn cn_skips_empty_fragments() {
        assert_eq!(cn(["a b", "", "b c"]), "a b c");
    }

    #[test]
    fn inline_style_later_set_wins_in_place() {
        let mut style = InlineStyle::new();
        style.set("width", "10px").set("height", "4px").set("width", "12px");
        assert_eq!(style.to_css(), "width: 12px; height: 4px;");
    }

    #[test]
    fn hex_parsing_accepts_upper_and_lower_case() {
        assert_eq!(Rgb::from_hex("#EBebEB"), Some(Rgb { r: 235, g: 235, b: 235 }));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(
            Rgb::from_hex("0385ff").expect("hex").rgba(0.1),
            "rgba(3, 133, 255, 0.1)"
        );
    }

    #[test]
    fn render_style_layers_hover_declarations() {
        let mut record = StyleRecord::default();
        record.style.set("background-color", "#181818").set("color", "#ffffff");
        record.hover.set("background-color", "#303030");
        assert_eq!(
            record.render_style(false),
            "background-color: #181818; color: #ffffff;"
        );
        assert_eq!(
            record.render_style(true),
            "background-color: #303030; color: #ffffff;"
        );
    }
}
