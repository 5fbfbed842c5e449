//! Recursive value-tree stringifier.

use crate::{number::format_number, Object, Precision, Value};

/// Spaces added per nesting level in pretty mode.
pub const INDENTATION: usize = 4;

/// Formatting switches for [`stringify_with`].
///
/// The default is pretty output with double precision numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringifyOptions {
    /// Emit no whitespace, newlines or indentation.
    pub minified: bool,
    pub precision: Precision,
}

impl StringifyOptions {
    pub fn minified() -> Self {
        Self {
            minified: true,
            ..Self::default()
        }
    }

    pub fn pretty() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
}

/// Stringifies `value` as minified JSON or, when `minified` is false, as
/// pretty printed JSON followed by a newline.
///
/// ```rust
/// use sendgrid_json::{stringify, Value};
///
/// let mut root = Value::object();
/// root.insert("tags", vec!["x"]);
///
/// assert_eq!(stringify(&root, false), "{\n    \"tags\": [\n        \"x\"\n    ]\n}\n");
/// ```
pub fn stringify(value: &Value, minified: bool) -> String {
    let options = StringifyOptions {
        minified,
        ..StringifyOptions::default()
    };
    stringify_with(value, &options)
}

/// Stringifies `value` with explicit [`StringifyOptions`].
pub fn stringify_with(value: &Value, options: &StringifyOptions) -> String {
    let mut writer = Writer {
        out: String::new(),
        precision: options.precision,
    };
    let level = if options.minified { None } else { Some(0) };

    writer.write_value(value, level);
    if level.is_some() {
        writer.out.push('\n');
    }
    writer.out
}

/// Output buffer threaded through the recursion.
///
/// `level` is `None` in minified mode, otherwise the current nesting depth.
struct Writer {
    out: String,
    precision: Precision,
}

impl Writer {
    fn write_value(&mut self, value: &Value, level: Option<usize>) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::String(s) => {
                self.out.push('"');
                self.out.push_str(s);
                self.out.push('"');
            }
            Value::Boolean(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => format_number(&mut self.out, *n, self.precision),
            Value::Array(items) => self.write_array(items, level),
            Value::Object(map) => self.write_object(map, level),
        }
    }

    fn write_array(&mut self, items: &[Value], level: Option<usize>) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }

        self.out.push('[');
        self.newline(level);
        for (i, item) in items.iter().enumerate() {
            self.indent(level.map(|l| l + 1));
            self.write_value(item, level.map(|l| l + 1));
            if i + 1 < items.len() {
                self.out.push(',');
                self.newline(level);
            }
        }
        self.newline(level);
        self.indent(level);
        self.out.push(']');
    }

    fn write_object(&mut self, map: &Object, level: Option<usize>) {
        if map.is_empty() {
            self.out.push_str("{}");
            return;
        }

        self.out.push('{');
        self.newline(level);
        for (i, (key, value)) in map.iter().enumerate() {
            self.indent(level.map(|l| l + 1));
            self.out.push('"');
            self.out.push_str(key);
            self.out.push_str("\":");
            if level.is_some() {
                self.out.push(' ');
            }
            self.write_value(value, level.map(|l| l + 1));
            if i + 1 < map.len() {
                self.out.push(',');
                self.newline(level);
            }
        }
        self.newline(level);
        self.indent(level);
        self.out.push('}');
    }

    fn newline(&mut self, level: Option<usize>) {
        if level.is_some() {
            self.out.push('\n');
        }
    }

    fn indent(&mut self, level: Option<usize>) {
        if let Some(level) = level {
            self.out
                .extend(std::iter::repeat(' ').take(level * INDENTATION));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;
    use pretty_assertions::assert_eq;

    fn sample() -> Value {
        let mut root = Value::object();
        root.insert("from", "a@x.com");
        root.insert("tags", vec!["x", "y"]);
        root
    }

    #[test]
    fn test_pretty_sample() {
        let expected = "{\n    \"from\": \"a@x.com\",\n    \"tags\": [\n        \"x\",\n        \"y\"\n    ]\n}\n";
        assert_eq!(stringify(&sample(), false), expected);
    }

    #[test]
    fn test_minified_sample() {
        assert_eq!(
            stringify(&sample(), true),
            r#"{"from":"a@x.com","tags":["x","y"]}"#
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(stringify(&Value::Null, true), "null");
        assert_eq!(stringify(&Value::Boolean(true), true), "true");
        assert_eq!(stringify(&Value::Boolean(false), false), "false\n");
        assert_eq!(stringify(&Value::from("hi"), true), "\"hi\"");
        assert_eq!(stringify(&Value::from(Number::I32(-3)), true), "-3");
    }

    #[test]
    fn test_strings_are_not_escaped() {
        let value = Value::from("say \"hi\"\n");
        assert_eq!(stringify(&value, true), "\"say \"hi\"\n\"");
    }

    #[test]
    fn test_empty_containers_stay_on_one_line() {
        let mut root = Value::object();
        root.insert("list", Value::array());
        root.insert("map", Value::object());

        assert_eq!(stringify(&Value::array(), false), "[]\n");
        assert_eq!(stringify(&Value::object(), false), "{}\n");
        assert_eq!(
            stringify(&root, false),
            "{\n    \"list\": [],\n    \"map\": {}\n}\n"
        );
        assert_eq!(stringify(&root, true), r#"{"list":[],"map":{}}"#);
    }

    #[test]
    fn test_nested_arrays_indent_closing_bracket_to_own_level() {
        let value = Value::from(vec![Value::from(vec![1u8, 2]), Value::from(3u8)]);
        let expected = "[\n    [\n        1,\n        2\n    ],\n    3\n]\n";
        assert_eq!(stringify(&value, false), expected);
    }

    #[test]
    fn test_single_precision_option() {
        let value = Value::from(0.1f64 + 0.2f64);
        assert_eq!(stringify(&value, true), "0.30000000000000004");

        let options = StringifyOptions::minified().with_precision(Precision::Single);
        assert_eq!(stringify_with(&value, &options), "0.3");
    }

    #[test]
    fn test_display_is_minified() {
        assert_eq!(sample().to_string(), r#"{"from":"a@x.com","tags":["x","y"]}"#);
    }
}
